// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    protocols::layer2::ethernet2::DecodeError,
    runtime::network::{
        consts::{
            HDR_LEN,
            MAC_ADDR_LEN,
        },
        types::{
            EtherType2,
            MacAddress,
        },
    },
};

//======================================================================================================================
// Structures
//======================================================================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ethernet2Header {
    // Bytes 0..6
    dst_addr: MacAddress,
    // Bytes 6..12
    src_addr: MacAddress,
    // Bytes 12..14
    ether_type: EtherType2,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Ethernet2Header {
    /// Creates a header for an Ethernet frame.
    pub fn new(dst_addr: MacAddress, src_addr: MacAddress, ether_type: EtherType2) -> Self {
        Self {
            dst_addr,
            src_addr,
            ether_type,
        }
    }

    /// Parses the header at the front of [buf]. Trailing bytes are ignored.
    pub fn parse(buf: &[u8]) -> Result<Self, DecodeError> {
        if buf.len() < HDR_LEN {
            return Err(DecodeError::Truncated {
                len: buf.len(),
                min: HDR_LEN,
            });
        }
        let hdr_buf: &[u8] = &buf[..HDR_LEN];
        let mut dst_addr: [u8; MAC_ADDR_LEN] = [0; MAC_ADDR_LEN];
        dst_addr.copy_from_slice(&hdr_buf[0..6]);
        let mut src_addr: [u8; MAC_ADDR_LEN] = [0; MAC_ADDR_LEN];
        src_addr.copy_from_slice(&hdr_buf[6..12]);
        let ether_type: EtherType2 = EtherType2::from_be_bytes([hdr_buf[12], hdr_buf[13]]);

        Ok(Self {
            dst_addr: MacAddress::new(dst_addr),
            src_addr: MacAddress::new(src_addr),
            ether_type,
        })
    }

    /// Writes the target header into [buf].
    pub fn serialize(&self, buf: &mut [u8; HDR_LEN]) {
        buf[0..6].copy_from_slice(&self.dst_addr.octets());
        buf[6..12].copy_from_slice(&self.src_addr.octets());
        buf[12..14].copy_from_slice(&self.ether_type.to_be_bytes());
    }

    pub fn to_bytes(&self) -> [u8; HDR_LEN] {
        let mut buf: [u8; HDR_LEN] = [0; HDR_LEN];
        self.serialize(&mut buf);
        buf
    }

    pub fn dst_addr(&self) -> MacAddress {
        self.dst_addr
    }

    pub fn src_addr(&self) -> MacAddress {
        self.src_addr
    }

    pub fn ether_type(&self) -> EtherType2 {
        self.ether_type
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
