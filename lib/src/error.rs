// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

#[cfg(not(feature = "std"))]
use core::fmt;
#[cfg(feature = "std")]
use std::fmt;

/// Errors reported while locating and decoding the VPD area.
#[derive(Debug)]
pub enum Error {
    /// No VPD signature has been found in the scanned range.
    NotFound,
    /// The byte window is too short to hold the record header.
    Truncated { available: usize },
    /// The length declared by the record does not fit in the byte window, or is too short to
    /// cover the checksummed fields.
    InvalidLength { length: u8, available: usize },
    /// The record does not start with the VPD signature.
    SignatureMismatch { found: [u8; 3] },
    /// The checksummed range of the record does not sum to zero.
    ChecksumMismatch { sum: u8 },
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "No VPD signature found"),
            Error::Truncated { available } => {
                write!(f, "VPD record truncated: only {available} bytes available")
            }
            Error::InvalidLength { length, available } => write!(
                f,
                "Invalid VPD record length: {length} (window holds {available} bytes)"
            ),
            Error::SignatureMismatch { found } => {
                write!(f, "Invalid VPD signature: {:02x?}", found)
            }
            Error::ChecksumMismatch { sum } => {
                write!(f, "VPD checksum mismatch: range sums to {sum:#04x}")
            }
            #[cfg(feature = "std")]
            Error::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(feature = "std")]
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
