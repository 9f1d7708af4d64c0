// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use crate::Error;
use crate::field::{self, FieldString};
use crate::record::VpdRecord;
use crate::region::FirmwareRegion;
use crate::scan::SignatureSearch;
#[cfg(not(feature = "std"))]
use core::fmt;
#[cfg(feature = "std")]
use std::fmt;

/// Identification fields extracted from a VPD record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct DecodedVpd {
    pub machine_type: FieldString<4>,
    pub machine_model: FieldString<3>,
    pub build_id: FieldString<9>,
    pub box_serial: FieldString<7>,
    pub planar_serial: FieldString<11>,
    /// Whether the checksummed range of the record sums to zero.
    pub checksum_valid: bool,
}

impl DecodedVpd {
    /// Copies the identification fields out of a decoded record.
    pub fn from_record(record: &VpdRecord) -> Self {
        let mach_type = record.mach_type();

        Self {
            machine_type: field::extract(mach_type),
            machine_model: field::extract(mach_type.get(4..).unwrap_or_default()),
            build_id: field::extract(record.build_id()),
            box_serial: field::extract(record.box_serial()),
            planar_serial: field::extract(record.planar_serial()),
            checksum_valid: record.checksum(),
        }
    }
}

impl fmt::Display for DecodedVpd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Machine Type: {}, Model: {}, Build ID: {}",
            self.machine_type, self.machine_model, self.build_id
        )?;
        write!(
            f,
            "Box Serial: {}, Planar Serial: {}",
            self.box_serial, self.planar_serial
        )
    }
}

/// Copies the identification fields out of a decoded record.
pub fn extract_fields(record: &VpdRecord) -> DecodedVpd {
    DecodedVpd::from_record(record)
}

/// Action taken when the checksum of a record does not match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChecksumPolicy {
    /// Log a warning and expose the fields anyway.
    #[default]
    Warn,
    /// Reject the record with [`Error::ChecksumMismatch`].
    Reject,
}

/// A VPD record located in firmware memory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct VpdArea {
    /// Physical address of the record.
    pub address: u64,
    /// Length declared by the record.
    pub length: u8,
    pub vpd: DecodedVpd,
}

impl VpdArea {
    /// Locates the VPD record in `region` and decodes it.
    pub fn from_region(
        region: &FirmwareRegion,
        search: &SignatureSearch,
        policy: ChecksumPolicy,
    ) -> Result<Self, Error> {
        let address = search.find(region).ok_or(Error::NotFound)?;
        let window = region.tail(address).ok_or(Error::NotFound)?;
        Self::from_window(address, window, policy)
    }

    /// Decodes the VPD record stored at the beginning of `window`, which has been mapped from
    /// the physical `address`.
    pub fn from_window(address: u64, window: &[u8], policy: ChecksumPolicy) -> Result<Self, Error> {
        let record = VpdRecord::from_slice(window)?;

        if !record.checksum() {
            let sum = record.checksum_sum();
            match policy {
                ChecksumPolicy::Warn => {
                    log::warn!("VPD checksum mismatch at {address:#x}, consider updating the BIOS")
                }
                ChecksumPolicy::Reject => return Err(Error::ChecksumMismatch { sum }),
            }
        }

        let vpd = DecodedVpd::from_record(&record);
        log::info!(
            "Machine Type: {}, Model: {}, Build ID: {}",
            vpd.machine_type,
            vpd.machine_model,
            vpd.build_id
        );
        log::info!(
            "Box Serial: {}, Planar Serial: {}",
            vpd.box_serial,
            vpd.planar_serial
        );

        Ok(Self {
            address,
            length: record.length(),
            vpd,
        })
    }
}
