// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Re-exports the types needed to locate and decode a VPD record.

pub use crate::Error;
pub use crate::attributes::Attribute;
pub use crate::field::FieldString;
pub use crate::record::VpdRecord;
pub use crate::region::FirmwareRegion;
pub use crate::scan::SignatureSearch;
pub use crate::vpd::{ChecksumPolicy, DecodedVpd, VpdArea};
