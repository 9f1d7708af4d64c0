// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Read-only view over a range of firmware memory.

/// A range of firmware memory mapped by the caller.
///
/// The bytes are addressed with the physical addresses they were mapped from. Every read is
/// bounds-checked against the borrowed slice.
#[derive(Clone, Copy, Debug)]
pub struct FirmwareRegion<'a> {
    base: u64,
    bytes: &'a [u8],
}

impl<'a> FirmwareRegion<'a> {
    pub fn new(base: u64, bytes: &'a [u8]) -> Self {
        Self { base, bytes }
    }

    /// Physical address of the first byte of the region.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Physical address right after the last byte of the region.
    pub fn end(&self) -> u64 {
        self.base.saturating_add(self.bytes.len() as u64)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns `len` bytes starting at the physical `address`, or `None` if any of them lies
    /// outside of the region.
    pub fn read(&self, address: u64, len: usize) -> Option<&'a [u8]> {
        let start = self.offset_of(address)?;
        self.bytes.get(start..start.checked_add(len)?)
    }

    /// Returns the bytes from the physical `address` up to the end of the region.
    pub fn tail(&self, address: u64) -> Option<&'a [u8]> {
        self.bytes.get(self.offset_of(address)?..)
    }

    fn offset_of(&self, address: u64) -> Option<usize> {
        usize::try_from(address.checked_sub(self.base)?).ok()
    }
}
