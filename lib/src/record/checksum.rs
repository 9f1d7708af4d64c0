// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use super::{VpdRecord, layout};

impl VpdRecord<'_> {
    /// Sum modulo 256 of the bytes going from the build ID up to the end of the record.
    pub fn checksum_sum(&self) -> u8 {
        self.as_bytes()
            .get(layout::BUILD_ID.start..)
            .unwrap_or_default()
            .iter()
            .fold(0, |acc: u8, byte| acc.wrapping_add(*byte))
    }

    /// Returns `true` when the checksummed range of the record sums to zero.
    pub fn checksum(&self) -> bool {
        self.checksum_sum() == 0
    }
}

/// Verifies the integrity of a decoded record.
///
/// A mismatch is not an error by itself: the fields of the record can still be extracted, and the
/// caller decides how to report it.
pub fn validate_checksum(record: &VpdRecord) -> bool {
    record.checksum()
}
