// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Decoder for the Vital Product Data (VPD) area found in the BIOS memory of IBM systems.
//!
//! The VPD record is a small fixed-layout structure that carries the machine type and model,
//! the BIOS build identifier and the box and planar serial numbers. Decoding happens in four
//! steps:
//!
//! 1. [`find_signature`] locates the record within a [`FirmwareRegion`].
//! 2. [`VpdRecord::from_slice`] interprets the located bytes and validates the declared length.
//! 3. [`VpdRecord::checksum`] verifies the integrity of the record.
//! 4. [`DecodedVpd::from_record`] copies the identification fields into owned values.
//!
//! [`VpdArea`] chains these steps together.
//!
//! # Example
//!
//! ```
//! use ibm_vpd::prelude::*;
//!
//! let mut bios = vec![0u8; 0x100];
//! let record = &mut bios[0x40..0x70];
//! record[2] = 48;
//! record[3..6].copy_from_slice(b"VPD");
//! record[24..31].copy_from_slice(b"2373ABC");
//!
//! let region = FirmwareRegion::new(0xF0000, &bios);
//! let search = SignatureSearch { length: bios.len(), ..SignatureSearch::BIOS };
//! let area = VpdArea::from_region(&region, &search, ChecksumPolicy::Reject).unwrap();
//!
//! assert_eq!(area.address, 0xF0040);
//! assert_eq!(area.vpd.machine_type.to_string(), "2373");
//! assert_eq!(area.vpd.machine_model.to_string(), "ABC");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod attributes;
mod error;
#[cfg(feature = "extraction")]
pub mod extraction;
pub mod field;
pub mod prelude;
pub mod record;
pub mod region;
pub mod scan;
mod vpd;

pub use error::Error;
pub use field::FieldString;
pub use record::{VpdRecord, decode, validate_checksum};
pub use region::FirmwareRegion;
pub use scan::{SignatureSearch, find_signature};
pub use vpd::{ChecksumPolicy, DecodedVpd, VpdArea, extract_fields};
