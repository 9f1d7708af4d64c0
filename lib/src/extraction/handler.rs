// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use crate::scan::SignatureSearch;
use crate::{ChecksumPolicy, Error, FirmwareRegion, VpdArea};
use acpi::{AcpiHandler, PhysicalMapping};

impl VpdArea {
    /// Maps the BIOS area through `handler` and decodes the VPD record stored in it.
    ///
    /// The mapping is released before returning.
    pub fn from_acpi_handler<H: AcpiHandler>(
        handler: &H,
        policy: ChecksumPolicy,
    ) -> Result<Self, Error> {
        let search = SignatureSearch::BIOS;

        // SAFETY: The BIOS area is read-only firmware memory which stays mapped for the lifetime of
        // the mapping object.
        let mapping: PhysicalMapping<H, u8> =
            unsafe { handler.map_physical_region(search.start as usize, search.length) };

        // SAFETY: The mapping covers `region_length` bytes starting at `virtual_start`, and the
        // slice does not outlive the mapping.
        let bytes = unsafe {
            core::slice::from_raw_parts(
                mapping.virtual_start().as_ptr() as *const u8,
                mapping.region_length(),
            )
        };

        let region = FirmwareRegion::new(mapping.physical_start() as u64, bytes);
        VpdArea::from_region(&region, &search, policy)
    }
}
