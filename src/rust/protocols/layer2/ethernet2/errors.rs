// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::{
    fail::Fail,
    network::types::EtherType2,
};
use ::libc::{
    EBADMSG,
    EMSGSIZE,
    ENOTSUP,
};
use ::std::{
    error,
    fmt,
};

//======================================================================================================================
// Structures
//======================================================================================================================

/// Reasons for which a frame cannot be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// Payload does not fit in a single frame.
    PayloadTooLarge { len: usize, max: usize },
}

/// Reasons for which a received byte sequence is not a valid frame. Checks run in the order listed here, except
/// for [DecodeError::BadEtherType] which is only raised when the codec is configured to reject foreign EtherTypes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes than the smallest valid frame.
    Truncated { len: usize, min: usize },
    /// A synchronization octet of the preamble is wrong.
    BadPreamble { offset: usize, found: u8 },
    /// The two octets closing the preamble region are not the start-of-frame delimiter.
    BadDelimiter { found: [u8; 2] },
    /// The frame check sequence does not match the frame contents.
    BadFcs { expected: u32, found: u32 },
    /// The EtherType is not the one carried by this link.
    BadEtherType { found: EtherType2 },
    /// The payload is larger than a frame may carry.
    PayloadTooLarge { len: usize, max: usize },
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::PayloadTooLarge { len, max } => {
                write!(f, "payload too large ({} bytes, maximum is {})", len, max)
            },
        }
    }
}

impl error::Error for EncodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Truncated { len, min } => write!(f, "frame truncated ({} bytes, minimum is {})", len, min),
            DecodeError::BadPreamble { offset, found } => {
                write!(f, "bad preamble octet {:#04x} at offset {}", found, offset)
            },
            DecodeError::BadDelimiter { found } => {
                write!(f, "bad start-of-frame delimiter ({:#04x} {:#04x})", found[0], found[1])
            },
            DecodeError::BadFcs { expected, found } => {
                write!(f, "frame check sequence mismatch (expected {:#010x}, found {:#010x})", expected, found)
            },
            DecodeError::BadEtherType { found } => write!(f, "unsupported EtherType {}", found),
            DecodeError::PayloadTooLarge { len, max } => {
                write!(f, "payload too large ({} bytes, maximum is {})", len, max)
            },
        }
    }
}

impl error::Error for DecodeError {}

/// Conversion Trait Implementation for Fail
impl From<EncodeError> for Fail {
    fn from(e: EncodeError) -> Self {
        match e {
            EncodeError::PayloadTooLarge { .. } => Fail::new(EMSGSIZE, &e.to_string()),
        }
    }
}

/// Conversion Trait Implementation for Fail
impl From<DecodeError> for Fail {
    fn from(e: DecodeError) -> Self {
        let errno: i32 = match e {
            DecodeError::PayloadTooLarge { .. } => EMSGSIZE,
            DecodeError::BadEtherType { .. } => ENOTSUP,
            DecodeError::Truncated { .. }
            | DecodeError::BadPreamble { .. }
            | DecodeError::BadDelimiter { .. }
            | DecodeError::BadFcs { .. } => EBADMSG,
        };
        Fail::new(errno, &e.to_string())
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
