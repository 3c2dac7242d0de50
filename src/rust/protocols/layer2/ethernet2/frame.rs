// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    protocols::layer2::ethernet2::{
        fcs,
        DecodeError,
        EncodeError,
        Ethernet2Header,
    },
    runtime::network::{
        config::EtherTypePolicy,
        consts::{
            ETH_FCS_LEN,
            ETH_MINIMUM_NBYTES,
            ETH_NBYTES,
            ETH_PREAMBLE,
            ETH_SFD,
            HDR_LEN,
            MIN_FRAME_SIZE,
            PREAMBLE_LEN,
            PREAMBLE_SYNC_LEN,
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

/// A decoded frame. The payload borrows from the buffer it was decoded from and keeps any padding added by the
/// sender.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ethernet2Frame<'a> {
    header: Ethernet2Header,
    payload: &'a [u8],
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl<'a> Ethernet2Frame<'a> {
    pub fn dst_addr(&self) -> MacAddress {
        self.header.dst_addr()
    }

    pub fn src_addr(&self) -> MacAddress {
        self.header.src_addr()
    }

    pub fn ether_type(&self) -> EtherType2 {
        self.header.ether_type()
    }

    /// Checks whether the frame carries the EtherType of this link.
    pub fn ether_type_valid(&self) -> bool {
        self.header.ether_type().is_expected()
    }

    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    pub fn into_parts(self) -> (Ethernet2Header, &'a [u8]) {
        (self.header, self.payload)
    }
}

//======================================================================================================================
// Standalone Functions
//======================================================================================================================

/// Builds a wire-ready frame: preamble, start-of-frame delimiter, header and payload. Payloads shorter than
/// [ETH_MINIMUM_NBYTES] are zero-padded.
pub fn encode(dst_addr: MacAddress, src_addr: MacAddress, payload: &[u8]) -> Result<Vec<u8>, EncodeError> {
    encode_with(dst_addr, src_addr, payload, false)
}

/// Parses a frame received from the wire. Frames carrying a foreign EtherType are accepted and reported through
/// [Ethernet2Frame::ether_type_valid].
pub fn decode(frame: &[u8]) -> Result<Ethernet2Frame<'_>, DecodeError> {
    decode_with(frame, EtherTypePolicy::Report, false)
}

/// Size of the frame that carries [payload_len] bytes of payload.
pub(super) fn encoded_len(payload_len: usize, with_fcs: bool) -> usize {
    let trailer: usize = if with_fcs { ETH_FCS_LEN } else { 0 };
    PREAMBLE_LEN + HDR_LEN + payload_len.max(ETH_MINIMUM_NBYTES) + trailer
}

pub(super) fn encode_with(
    dst_addr: MacAddress,
    src_addr: MacAddress,
    payload: &[u8],
    with_fcs: bool,
) -> Result<Vec<u8>, EncodeError> {
    if payload.len() > ETH_NBYTES {
        return Err(EncodeError::PayloadTooLarge {
            len: payload.len(),
            max: ETH_NBYTES,
        });
    }

    let header: Ethernet2Header = Ethernet2Header::new(dst_addr, src_addr, EtherType2::ETH_TYPE);
    let mut frame: Vec<u8> = Vec::with_capacity(encoded_len(payload.len(), with_fcs));
    frame.extend_from_slice(&[ETH_PREAMBLE; PREAMBLE_SYNC_LEN]);
    frame.extend_from_slice(&[ETH_PREAMBLE, ETH_SFD]);
    frame.extend_from_slice(&header.to_bytes());
    frame.extend_from_slice(payload);
    frame.resize(PREAMBLE_LEN + HDR_LEN + payload.len().max(ETH_MINIMUM_NBYTES), 0);
    if with_fcs {
        fcs::append_fcs(&mut frame, PREAMBLE_LEN);
    }

    Ok(frame)
}

pub(super) fn decode_with(
    frame: &[u8],
    policy: EtherTypePolicy,
    with_fcs: bool,
) -> Result<Ethernet2Frame<'_>, DecodeError> {
    // Length.
    let min: usize = MIN_FRAME_SIZE + if with_fcs { ETH_FCS_LEN } else { 0 };
    if frame.len() < min {
        return Err(DecodeError::Truncated { len: frame.len(), min });
    }

    // Preamble.
    if let Some(offset) = frame[..PREAMBLE_SYNC_LEN].iter().position(|octet| *octet != ETH_PREAMBLE) {
        return Err(DecodeError::BadPreamble {
            offset,
            found: frame[offset],
        });
    }

    // Start-of-frame delimiter.
    let delimiter: [u8; 2] = [frame[PREAMBLE_LEN - 2], frame[PREAMBLE_LEN - 1]];
    if delimiter != [ETH_PREAMBLE, ETH_SFD] {
        return Err(DecodeError::BadDelimiter { found: delimiter });
    }

    let body: &[u8] = if with_fcs {
        fcs::strip_fcs(&frame[PREAMBLE_LEN..])?
    } else {
        &frame[PREAMBLE_LEN..]
    };

    let header: Ethernet2Header = Ethernet2Header::parse(body)?;
    if policy == EtherTypePolicy::Reject && !header.ether_type().is_expected() {
        return Err(DecodeError::BadEtherType {
            found: header.ether_type(),
        });
    }

    // Payload lower bound is covered by the length check.
    let payload: &[u8] = &body[HDR_LEN..];
    if payload.len() > ETH_NBYTES {
        return Err(DecodeError::PayloadTooLarge {
            len: payload.len(),
            max: ETH_NBYTES,
        });
    }

    Ok(Ethernet2Frame { header, payload })
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
