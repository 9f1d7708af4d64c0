// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Provides access to the content of a VPD record.

mod checksum;
#[cfg(test)]
mod tests;

use crate::Error;
pub use checksum::validate_checksum;

pub mod layout {
    //! Offsets of the fields of the VPD record.
    use core::ops::Range;

    pub const HEADER: Range<usize> = 0..2;
    pub const LENGTH: usize = 2;
    pub const SIGNATURE: Range<usize> = 3..6;
    pub const RESERVED: Range<usize> = 6..13;
    pub const PLANAR_SERIAL: Range<usize> = 13..24;
    pub const MACH_TYPE: Range<usize> = 24..31;
    pub const BOX_SERIAL: Range<usize> = 31..38;
    pub const BUILD_ID: Range<usize> = 38..47;
    pub const CHECKSUM: usize = 47;

    /// Size of the record when all the fields are present.
    pub const RECORD_SIZE: usize = 48;

    pub const SIGNATURE_VALUE: &[u8] = b"VPD";
}

/// A VPD record located in firmware memory.
///
/// The record borrows the firmware bytes and only exposes the first `Length` bytes of it. The
/// length has been checked against the size of the window the record has been decoded from.
#[derive(Clone, Copy, Debug)]
pub struct VpdRecord<'a> {
    bytes: &'a [u8],
}

impl<'a> VpdRecord<'a> {
    /// Interprets the bytes at the beginning of `window` as a VPD record.
    ///
    /// The length declared by the record is firmware-controlled: the record is rejected if it
    /// does not fit in `window`, or if it is too short to reach the checksummed fields.
    pub fn from_slice(window: &'a [u8]) -> Result<Self, Error> {
        let available = window.len();
        let Some(header) = window.get(..layout::SIGNATURE.end) else {
            return Err(Error::Truncated { available });
        };

        let length = header[layout::LENGTH];
        if (length as usize) > available {
            return Err(Error::InvalidLength { length, available });
        }

        let signature = &header[layout::SIGNATURE];
        if signature != layout::SIGNATURE_VALUE {
            return Err(Error::SignatureMismatch {
                found: signature.try_into().unwrap_or_default(),
            });
        }

        if (length as usize) < layout::BUILD_ID.start {
            return Err(Error::InvalidLength { length, available });
        }

        if (length as usize) < layout::RECORD_SIZE {
            log::debug!("Short VPD record: {length} bytes");
        }

        Ok(Self {
            bytes: &window[..length as usize],
        })
    }

    /// Raw bytes of the record, bounded by its declared length.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn header(&self) -> u16 {
        u16::from_le_bytes([self.bytes[0], self.bytes[1]])
    }

    /// Total length of the record declared in its header.
    pub fn length(&self) -> u8 {
        self.bytes[layout::LENGTH]
    }

    pub fn signature(&self) -> &'a [u8] {
        self.field(layout::SIGNATURE)
    }

    pub fn reserved(&self) -> &'a [u8] {
        self.field(layout::RESERVED)
    }

    pub fn planar_serial(&self) -> &'a [u8] {
        self.field(layout::PLANAR_SERIAL)
    }

    /// Machine type (first 4 bytes) followed by the machine model (next 3 bytes).
    pub fn mach_type(&self) -> &'a [u8] {
        self.field(layout::MACH_TYPE)
    }

    pub fn box_serial(&self) -> &'a [u8] {
        self.field(layout::BOX_SERIAL)
    }

    pub fn build_id(&self) -> &'a [u8] {
        self.field(layout::BUILD_ID)
    }

    /// Checksum byte, if the record is long enough to hold it.
    pub fn checksum_byte(&self) -> Option<u8> {
        self.bytes.get(layout::CHECKSUM).copied()
    }

    /// Returns the part of a field that lies within the declared length of the record.
    fn field(&self, range: core::ops::Range<usize>) -> &'a [u8] {
        let end = range.end.min(self.bytes.len());
        self.bytes.get(range.start..end).unwrap_or_default()
    }
}

/// Decodes the VPD record stored at the beginning of `window`.
pub fn decode(window: &[u8]) -> Result<VpdRecord<'_>, Error> {
    VpdRecord::from_slice(window)
}
