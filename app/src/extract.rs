// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

#![allow(unused_assignments)]

use ibm_vpd::prelude::*;

pub fn extract(
    #[cfg_attr(not(target_os = "linux"), allow(unused_variables))] policy: ChecksumPolicy,
) -> Result<VpdArea, Error> {
    let mut result: Result<VpdArea, Error> = Err(Error::NotFound);

    #[cfg(target_os = "linux")]
    {
        result = VpdArea::from_dev_mem(policy);
    }
    #[cfg(not(target_os = "linux"))]
    {
        log::warn!("Reading the firmware memory is not supported on this platform");
    }

    result
}
