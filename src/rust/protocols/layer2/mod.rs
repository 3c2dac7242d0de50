// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Exports
//======================================================================================================================

pub mod ethernet2;
pub use self::ethernet2::{
    decode,
    encode,
    DecodeError,
    EncodeError,
    Ethernet2Codec,
    Ethernet2Frame,
    Ethernet2Header,
};
pub use crate::runtime::network::config::EtherTypePolicy;

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::{
    fail::Fail,
    network::{
        config::Ethernet2Config,
        consts::RECEIVE_BATCH_SIZE,
        types::MacAddress,
    },
};
use ::arrayvec::ArrayVec;
use ::libc::EINVAL;

//======================================================================================================================
// Traits
//======================================================================================================================

/// Raw octet transport underneath the link layer.
pub trait PhysicalLayer {
    /// Hands a wire-ready frame to the transport.
    fn transmit(&mut self, frame: Vec<u8>) -> Result<(), Fail>;

    /// Takes up to [RECEIVE_BATCH_SIZE] frames off the transport.
    fn receive(&mut self) -> ArrayVec<Vec<u8>, RECEIVE_BATCH_SIZE>;
}

//======================================================================================================================
// Structures
//======================================================================================================================

pub struct Layer2Endpoint {
    layer1_endpoint: Box<dyn PhysicalLayer>,
    codec: Ethernet2Codec,
    local_link_addr: MacAddress,
    promiscuous: bool,
    accept_multicast: bool,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Layer2Endpoint {
    pub fn new(config: &Ethernet2Config, layer1_endpoint: Box<dyn PhysicalLayer>) -> Result<Self, Fail> {
        let local_link_addr: MacAddress = config.get_local_link_addr();
        if local_link_addr.is_nil() || local_link_addr.is_multicast() {
            let cause: String = format!("invalid local link address: {}", local_link_addr);
            error!("new(): {}", cause);
            return Err(Fail::new(EINVAL, &cause));
        }
        Ok(Self {
            layer1_endpoint,
            codec: Ethernet2Codec::new(config),
            local_link_addr,
            promiscuous: config.get_promiscuous(),
            accept_multicast: config.get_accept_multicast(),
        })
    }

    pub fn get_link_addr(&self) -> MacAddress {
        self.local_link_addr
    }

    pub fn get_codec(&self) -> &Ethernet2Codec {
        &self.codec
    }

    /// Frames [payload] for [dst_addr] and hands it to the physical layer.
    pub fn transmit(&mut self, dst_addr: MacAddress, payload: &[u8]) -> Result<(), Fail> {
        let frame: Vec<u8> = match self.codec.encode(dst_addr, self.local_link_addr, payload) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("transmit(): dropping frame to {}: {}", dst_addr, e);
                return Err(e.into());
            },
        };
        trace!("transmit(): {} bytes to {}", frame.len(), dst_addr);
        self.layer1_endpoint.transmit(frame)
    }

    /// Decodes the next batch of frames, dropping the ones that are malformed or not addressed to us.
    pub fn receive(&mut self) -> ArrayVec<(Ethernet2Header, Vec<u8>), RECEIVE_BATCH_SIZE> {
        let mut batch: ArrayVec<(Ethernet2Header, Vec<u8>), RECEIVE_BATCH_SIZE> = ArrayVec::new();
        for pkt in self.layer1_endpoint.receive() {
            let (header, payload) = match self.codec.decode(&pkt) {
                Ok(frame) => frame.into_parts(),
                Err(e) => {
                    // TODO: Collect dropped frame statistics.
                    let cause: &str = "Invalid Ethernet frame";
                    warn!("{}: {}", cause, e);
                    continue;
                },
            };
            debug!("Endpoint received {:?}", header);
            if !self.accepts(header.dst_addr()) {
                let cause: &str = "invalid link address";
                debug!("dropping frame to {}: {}", header.dst_addr(), cause);
                continue;
            }
            if !header.ether_type().is_expected() {
                warn!("received frame with unexpected EtherType {}", header.ether_type());
            }
            batch.push((header, payload.to_vec()))
        }
        batch
    }

    /// Address filter applied to received frames.
    fn accepts(&self, dst_addr: MacAddress) -> bool {
        self.promiscuous
            || dst_addr == self.local_link_addr
            || dst_addr.is_broadcast()
            || (self.accept_multicast && dst_addr.is_multicast())
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
