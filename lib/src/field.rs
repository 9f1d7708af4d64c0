// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Fixed-width text fields.
//!
//! The text fields of the VPD record are padded with spaces or NUL bytes, and nothing guarantees
//! that they are NUL-terminated or even ASCII. [`FieldString`] keeps a bounded copy of the raw
//! bytes and renders each of them as the character with the same code point.

use core::fmt::{self, Write};

/// Owned copy of a text field holding at most `N` bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldString<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> FieldString<N> {
    /// Maximum number of bytes the field can hold.
    pub const WIDTH: usize = N;

    /// Copies the raw bytes of a field, stopping at the width of the field or at the first NUL
    /// byte, whichever comes first.
    pub fn from_raw(raw: &[u8]) -> Self {
        let raw = &raw[..raw.len().min(N)];
        let len = raw.iter().position(|&byte| byte == 0).unwrap_or(raw.len());

        let mut bytes = [0; N];
        bytes[..len].copy_from_slice(&raw[..len]);
        Self { bytes, len }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Returns the field as a string slice if it only holds valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the characters of the field, mapping each byte to the character with the
    /// same code point.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.as_bytes().iter().map(|&byte| char::from(byte))
    }
}

/// Copies a raw field into an owned string holding at most `N` bytes.
pub fn extract<const N: usize>(raw: &[u8]) -> FieldString<N> {
    FieldString::from_raw(raw)
}

impl<const N: usize> Default for FieldString<N> {
    fn default() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }
}

impl<const N: usize> fmt::Display for FieldString<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.chars().try_for_each(|c| f.write_char(c))
    }
}

impl<const N: usize> fmt::Debug for FieldString<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char('"')?;
        for c in self.chars() {
            write!(f, "{}", c.escape_debug())?;
        }
        f.write_char('"')
    }
}

impl<const N: usize> PartialEq<str> for FieldString<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for FieldString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

#[cfg(feature = "serialize")]
impl<const N: usize> serde::Serialize for FieldString<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
