// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use crate::scan::SignatureSearch;
use crate::{ChecksumPolicy, Error, FirmwareRegion, VpdArea};
use std::path::Path;

impl VpdArea {
    /// Scans a dump of firmware memory for the VPD record. `base` is the physical address the
    /// first byte of the dump has been read from.
    pub fn from_file(path: &Path, base: u64, policy: ChecksumPolicy) -> Result<Self, Error> {
        let dump = std::fs::read(path)?;
        let search = SignatureSearch {
            start: base,
            length: dump.len(),
            ..SignatureSearch::BIOS
        };

        VpdArea::from_region(&FirmwareRegion::new(base, &dump), &search, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bios_dump() {
        let area = VpdArea::from_file(
            Path::new("tests/samples/bios_f0000.bin"),
            0xF0000,
            ChecksumPolicy::Reject,
        )
        .unwrap();

        assert_eq!(area.address, 0xFE3C0);
        assert_eq!(area.length, 48);
        assert_eq!(area.vpd.machine_type, "2373");
        assert_eq!(area.vpd.build_id, "1RETDRWW");
    }

    #[test]
    fn missing_file() {
        let result = VpdArea::from_file(
            Path::new("tests/samples/missing.bin"),
            0xF0000,
            ChecksumPolicy::Warn,
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
