// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Retrieves the VPD record from the firmware memory of the running system.

#[cfg(feature = "std")]
mod file;
mod handler;
#[cfg(all(feature = "std", target_os = "linux"))]
mod linux;
