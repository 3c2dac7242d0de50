// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::network::consts::{
    ETH_TYPE,
    ETH_TYPE_H,
    ETH_TYPE_L,
};
use ::std::fmt;

//======================================================================================================================
// Structures
//======================================================================================================================

/// Two-octet EtherType field of an Ethernet II frame.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct EtherType2(u16);

//======================================================================================================================
// Associate Functions
//======================================================================================================================

impl EtherType2 {
    /// EtherType emitted on every encoded frame.
    pub const ETH_TYPE: EtherType2 = EtherType2(ETH_TYPE);

    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Reads an EtherType in network byte order.
    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    /// Returns the EtherType in network byte order.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    /// Checks whether the target [EtherType2] matches the one this link carries.
    pub fn is_expected(self) -> bool {
        self.to_be_bytes() == [ETH_TYPE_H, ETH_TYPE_L]
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Display for EtherType2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

impl fmt::Debug for EtherType2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EtherType2({:#06x})", self.0)
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
