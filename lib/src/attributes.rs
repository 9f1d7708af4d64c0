// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Read-only attributes published for a decoded VPD record.
//!
//! Each field is published under the `hw.vpd` hierarchy and keyed by the instance number of the
//! record, e.g. `hw.vpd.machine.type.0`.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, string::ToString, vec::Vec};

use crate::DecodedVpd;

/// Root of the attribute hierarchy.
pub const ROOT: &str = "hw.vpd";

/// Attribute nodes, relative to [`ROOT`].
pub mod nodes {
    pub const MACHINE_TYPE: &str = "machine.type";
    pub const MACHINE_MODEL: &str = "machine.model";
    pub const BUILD_ID: &str = "build_id";
    pub const BOX_SERIAL: &str = "serial.box";
    pub const PLANAR_SERIAL: &str = "serial.planar";
}

/// A published name/value pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    fn new(node: &str, unit: u32, value: impl ToString) -> Self {
        Self {
            name: format!("{ROOT}.{node}.{unit}"),
            value: value.to_string(),
        }
    }
}

impl DecodedVpd {
    /// Returns the attributes exposing the fields of the record for instance `unit`.
    pub fn attributes(&self, unit: u32) -> Vec<Attribute> {
        Vec::from([
            Attribute::new(nodes::MACHINE_TYPE, unit, self.machine_type),
            Attribute::new(nodes::MACHINE_MODEL, unit, self.machine_model),
            Attribute::new(nodes::BUILD_ID, unit, self.build_id),
            Attribute::new(nodes::BOX_SERIAL, unit, self.box_serial),
            Attribute::new(nodes::PLANAR_SERIAL, unit, self.planar_serial),
        ])
    }
}
