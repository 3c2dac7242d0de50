// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Frame check sequence: IEEE 802.3 CRC-32 over header and payload, sent least-significant octet first.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    protocols::layer2::ethernet2::DecodeError,
    runtime::network::consts::ETH_FCS_LEN,
};
use ::crc::{
    Crc,
    CRC_32_ISO_HDLC,
};

//======================================================================================================================
// Constants
//======================================================================================================================

const ETHERNET_CRC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

//======================================================================================================================
// Standalone Functions
//======================================================================================================================

/// Computes the frame check sequence of [bytes].
pub fn compute_fcs(bytes: &[u8]) -> u32 {
    ETHERNET_CRC.checksum(bytes)
}

/// Appends the frame check sequence of `frame[offset..]` to [frame].
pub fn append_fcs(frame: &mut Vec<u8>, offset: usize) {
    let fcs: u32 = compute_fcs(&frame[offset..]);
    frame.extend_from_slice(&fcs.to_le_bytes());
}

/// Verifies the frame check sequence that trails [bytes] and returns the bytes it covers.
pub fn strip_fcs(bytes: &[u8]) -> Result<&[u8], DecodeError> {
    if bytes.len() < ETH_FCS_LEN {
        return Err(DecodeError::Truncated {
            len: bytes.len(),
            min: ETH_FCS_LEN,
        });
    }
    let (covered, trailer): (&[u8], &[u8]) = bytes.split_at(bytes.len() - ETH_FCS_LEN);
    let found: u32 = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    let expected: u32 = compute_fcs(covered);
    if found != expected {
        return Err(DecodeError::BadFcs { expected, found });
    }
    Ok(covered)
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
