// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    protocols::layer2::ethernet2::{
        frame::{
            self,
            Ethernet2Frame,
        },
        DecodeError,
        EncodeError,
    },
    runtime::network::{
        config::{
            EtherTypePolicy,
            Ethernet2Config,
        },
        types::MacAddress,
    },
};

//======================================================================================================================
// Structures
//======================================================================================================================

/// Stateless frame codec. Holds only the link policies and may be shared freely across threads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ethernet2Codec {
    /// Handling of unexpected EtherTypes.
    ether_type_policy: EtherTypePolicy,
    /// Append and verify a frame check sequence?
    fcs: bool,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Ethernet2Codec {
    /// Creates a codec from the link configuration.
    pub fn new(config: &Ethernet2Config) -> Self {
        Self {
            ether_type_policy: config.get_ether_type_policy(),
            fcs: config.get_fcs(),
        }
    }

    /// Encodes a frame carrying [payload] from [src_addr] to [dst_addr].
    pub fn encode(&self, dst_addr: MacAddress, src_addr: MacAddress, payload: &[u8]) -> Result<Vec<u8>, EncodeError> {
        frame::encode_with(dst_addr, src_addr, payload, self.fcs)
    }

    /// Decodes a frame received from the wire.
    pub fn decode<'a>(&self, frame: &'a [u8]) -> Result<Ethernet2Frame<'a>, DecodeError> {
        frame::decode_with(frame, self.ether_type_policy, self.fcs)
    }

    /// Size of the frame that carries [payload_len] bytes of payload.
    pub fn encoded_len(&self, payload_len: usize) -> usize {
        frame::encoded_len(payload_len, self.fcs)
    }

    pub fn ether_type_policy(&self) -> EtherTypePolicy {
        self.ether_type_policy
    }

    pub fn fcs(&self) -> bool {
        self.fcs
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
