// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

use super::{VpdRecord, decode, layout, validate_checksum};
use crate::{DecodedVpd, Error, FirmwareRegion, SignatureSearch, find_signature};

fn sample_record() -> Vec<u8> {
    std::fs::read("tests/samples/vpd_bad_checksum.bin").unwrap()
}

/// Returns a valid 48-byte record built from the faulty sample.
fn valid_record() -> Vec<u8> {
    let mut bytes = sample_record();
    bytes[40] = b'E';
    bytes
}

#[test]
fn from_slice() {
    let bytes = valid_record();
    let record = VpdRecord::from_slice(&bytes).unwrap();

    assert_eq!(record.header(), 0x55aa);
    assert_eq!(record.length(), 48);
    assert_eq!(record.signature(), b"VPD");
    assert_eq!(record.reserved(), &[0u8; 7]);
    assert_eq!(record.planar_serial(), b"J1W2B34C5DE");
    assert_eq!(record.mach_type(), b"2373G1U");
    assert_eq!(record.box_serial(), b"AB12345");
    assert_eq!(record.build_id(), b"1RETDRWW\0");
    assert!(record.checksum_byte().is_some());
    assert!(record.checksum());
}

#[test]
fn record_is_bounded_by_length() {
    let mut bytes = valid_record();
    bytes.extend_from_slice(b"trailing data");
    let record = decode(&bytes).unwrap();

    assert_eq!(record.as_bytes().len(), layout::RECORD_SIZE);
}

#[test]
fn truncated() {
    let bytes = valid_record();

    for len in 0..layout::SIGNATURE.end {
        let result = decode(&bytes[..len]);
        assert!(
            matches!(result, Err(Error::Truncated { available }) if available == len),
            "window of {len} bytes"
        );
    }
}

#[test]
fn length_beyond_window() {
    let bytes = valid_record();

    for len in layout::SIGNATURE.end..layout::RECORD_SIZE {
        let result = decode(&bytes[..len]);
        assert!(
            matches!(
                result,
                Err(Error::InvalidLength { length: 48, available }) if available == len
            ),
            "window of {len} bytes"
        );
    }
}

#[test]
fn length_too_short() {
    let mut bytes = valid_record();
    bytes[layout::LENGTH] = (layout::BUILD_ID.start - 1) as u8;

    assert!(matches!(
        decode(&bytes),
        Err(Error::InvalidLength { length: 37, .. })
    ));

    bytes[layout::LENGTH] = layout::BUILD_ID.start as u8;
    let record = decode(&bytes).unwrap();
    assert!(record.build_id().is_empty());
    assert_eq!(record.checksum_byte(), None);
}

#[test]
fn signature_mismatch() {
    let mut bytes = valid_record();
    bytes[layout::SIGNATURE].copy_from_slice(b"VDP");

    assert!(matches!(
        decode(&bytes),
        Err(Error::SignatureMismatch { found }) if &found == b"VDP"
    ));
}

#[test]
fn signature_mismatch_with_short_length() {
    let mut bytes = valid_record();
    bytes[layout::LENGTH] = 10;
    bytes[layout::SIGNATURE].copy_from_slice(b"XYZ");

    assert!(matches!(
        decode(&bytes),
        Err(Error::SignatureMismatch { found }) if &found == b"XYZ"
    ));
}

#[test]
fn checksum() {
    let bytes = valid_record();
    assert!(validate_checksum(&decode(&bytes).unwrap()));

    let bytes = sample_record();
    let record = decode(&bytes).unwrap();
    assert!(!validate_checksum(&record));
    assert_eq!(record.checksum_sum(), 0x20);
}

#[test]
fn checksum_single_byte_flip() {
    let bytes = valid_record();

    for offset in layout::BUILD_ID.start..layout::RECORD_SIZE {
        let mut corrupted = bytes.clone();
        corrupted[offset] ^= 0x04;
        assert!(
            !validate_checksum(&decode(&corrupted).unwrap()),
            "byte {offset} flipped"
        );
    }
}

#[test]
fn checksum_ignores_fields_before_build_id() {
    let mut bytes = valid_record();
    bytes[layout::PLANAR_SERIAL.start] = b'X';
    bytes[layout::BOX_SERIAL.end - 1] = b'X';

    assert!(validate_checksum(&decode(&bytes).unwrap()));
}

#[test]
fn checksum_short_record() {
    let mut bytes = valid_record();
    bytes[layout::LENGTH] = 40;
    bytes[38] = 0x80;
    bytes[39] = 0x80;

    // 0x80 + 0x80 = 256, the bytes after the declared length are not summed.
    assert!(validate_checksum(&decode(&bytes).unwrap()));
}

#[test]
fn mach_type_split() {
    let mut bytes = valid_record();
    bytes[layout::MACH_TYPE].copy_from_slice(b"1234ABC");
    let vpd = DecodedVpd::from_record(&decode(&bytes).unwrap());

    assert_eq!(vpd.machine_type, "1234");
    assert_eq!(vpd.machine_model, "ABC");
}

#[test]
fn from_bios_dump() {
    let bios = std::fs::read("tests/samples/bios_f0000.bin").unwrap();
    let region = FirmwareRegion::new(0xF0000, &bios);

    let address = find_signature(&region, &SignatureSearch::BIOS).unwrap();
    assert_eq!(address, 0xFE3C0);

    let record = decode(region.tail(address).unwrap()).unwrap();
    let vpd = DecodedVpd::from_record(&record);

    assert!(vpd.checksum_valid);
    assert_eq!(vpd.machine_type, "2373");
    assert_eq!(vpd.machine_model, "G1U");
    assert_eq!(vpd.build_id, "1RETDRWW");
    assert_eq!(vpd.box_serial, "AB12345");
    assert_eq!(vpd.planar_serial, "J1W2B34C5DE");
}
