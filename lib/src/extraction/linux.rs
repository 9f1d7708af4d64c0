// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use crate::scan::SignatureSearch;
use crate::{ChecksumPolicy, Error, FirmwareRegion, VpdArea};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

const DEV_MEM: &str = "/dev/mem";

impl VpdArea {
    /// Reads the BIOS area from `/dev/mem` and decodes the VPD record stored in it.
    pub fn from_dev_mem(policy: ChecksumPolicy) -> Result<Self, Error> {
        let search = SignatureSearch::BIOS;
        let mut bios = vec![0; search.length];

        let mut file = File::open(DEV_MEM)?;
        file.seek(SeekFrom::Start(search.start))?;
        file.read_exact(&mut bios)?;

        log::debug!("Read {} bytes from {DEV_MEM} at {:#x}", bios.len(), search.start);
        VpdArea::from_region(&FirmwareRegion::new(search.start, &bios), &search, policy)
    }
}
