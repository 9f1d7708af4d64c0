// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use ibm_vpd::prelude::*;
use std::path::Path;

/// Decodes the VPD record stored in `input_file`.
///
/// The file either holds a dump of the firmware memory starting at `base`, or with `raw`, the
/// record itself located at `base`.
pub fn decode(
    input_file: &Path,
    base: u64,
    raw: bool,
    policy: ChecksumPolicy,
) -> Result<VpdArea, Error> {
    if raw {
        let data = std::fs::read(input_file)?;
        VpdArea::from_window(base, &data, policy)
    } else {
        VpdArea::from_file(input_file, base, policy)
    }
}
