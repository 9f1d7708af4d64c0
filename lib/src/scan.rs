// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Signature scan over firmware memory.

use crate::record::layout;
use crate::region::FirmwareRegion;

/// Parameters of a signature scan.
///
/// The scan visits the windows starting at `start`, `start + stride`, `start + 2 * stride`...
/// and compares the bytes found `marker_offset` bytes into each window with `marker`. A window
/// only matches if the whole marker lies within `[start, start + length)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureSearch {
    pub start: u64,
    pub length: usize,
    pub stride: usize,
    pub marker: &'static [u8],
    pub marker_offset: usize,
}

impl SignatureSearch {
    /// Location of the VPD area: somewhere in the 64 KiB BIOS area, aligned on a paragraph.
    pub const BIOS: SignatureSearch = SignatureSearch {
        start: 0xF0000,
        length: 0x10000,
        stride: 0x10,
        marker: layout::SIGNATURE_VALUE,
        marker_offset: layout::SIGNATURE.start,
    };

    /// Physical address right after the last byte of the scanned range.
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.length as u64)
    }

    /// Returns the address of the first window matching the signature.
    pub fn find(&self, region: &FirmwareRegion) -> Option<u64> {
        if self.stride == 0 || self.marker.is_empty() {
            return None;
        }

        let end = self.end();
        let span = self.marker_offset.checked_add(self.marker.len())? as u64;

        let address = (self.start..end)
            .step_by(self.stride)
            .take_while(|address| address.checked_add(span).is_some_and(|last| last <= end))
            .find(|&address| {
                region.read(address + self.marker_offset as u64, self.marker.len())
                    == Some(self.marker)
            });

        match address {
            Some(address) => log::debug!("Signature found at {address:#x}"),
            None => log::debug!(
                "No signature found in [{:#x}, {:#x}) of region [{:#x}, {:#x})",
                self.start,
                end,
                region.base(),
                region.end()
            ),
        }

        address
    }
}

impl Default for SignatureSearch {
    fn default() -> Self {
        Self::BIOS
    }
}

/// Scans `region` for the first window matching `search`.
///
/// A missing signature is not an error: `None` is returned and the caller decides whether the
/// absence of the record is fatal.
pub fn find_signature(region: &FirmwareRegion, search: &SignatureSearch) -> Option<u64> {
    search.find(region)
}
