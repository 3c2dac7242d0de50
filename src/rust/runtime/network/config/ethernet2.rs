// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    config::Config,
    runtime::{
        fail::Fail,
        network::types::MacAddress,
    },
};
use ::libc::EINVAL;
use ::std::str::FromStr;

//======================================================================================================================
// Structures
//======================================================================================================================

/// What the decoder does with a frame whose EtherType is not the one this link carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum EtherTypePolicy {
    /// Accept the frame and flag the EtherType as invalid.
    #[default]
    Report,
    /// Fail decoding.
    Reject,
}

/// Ethernet II Configuration Descriptor
#[derive(Clone, Debug)]
pub struct Ethernet2Config {
    /// Link address of the local interface.
    local_link_addr: MacAddress,
    /// Handling of unexpected EtherTypes.
    ether_type_policy: EtherTypePolicy,
    /// Append and verify a frame check sequence?
    fcs: bool,
    /// Accept frames addressed to anyone?
    promiscuous: bool,
    /// Accept frames addressed to multicast groups?
    accept_multicast: bool,
}

//======================================================================================================================
// Associate Functions
//======================================================================================================================

/// Associate functions for Ethernet II Configuration Descriptor
impl Ethernet2Config {
    /// Creates an Ethernet II Configuration Descriptor.
    pub fn new(config: &Config) -> Result<Self, Fail> {
        let mut options: Self = Self::default().set_local_link_addr(config.local_link_addr()?);
        if let Some(value) = config.ether_type_policy()? {
            options = options.set_ether_type_policy(value);
        }
        if let Some(value) = config.fcs()? {
            options = options.set_fcs(value);
        }
        if let Some(value) = config.promiscuous()? {
            options = options.set_promiscuous(value);
        }
        if let Some(value) = config.accept_multicast()? {
            options = options.set_accept_multicast(value);
        }
        Ok(options)
    }

    /// Gets the local link address in the target [Ethernet2Config].
    pub fn get_local_link_addr(&self) -> MacAddress {
        self.local_link_addr
    }

    /// Gets the EtherType policy in the target [Ethernet2Config].
    pub fn get_ether_type_policy(&self) -> EtherTypePolicy {
        self.ether_type_policy
    }

    /// Gets the frame check sequence option in the target [Ethernet2Config].
    pub fn get_fcs(&self) -> bool {
        self.fcs
    }

    /// Gets the promiscuous mode option in the target [Ethernet2Config].
    pub fn get_promiscuous(&self) -> bool {
        self.promiscuous
    }

    /// Gets the multicast reception option in the target [Ethernet2Config].
    pub fn get_accept_multicast(&self) -> bool {
        self.accept_multicast
    }

    /// Sets the local link address in the target [Ethernet2Config].
    pub fn set_local_link_addr(mut self, value: MacAddress) -> Self {
        self.local_link_addr = value;
        self
    }

    /// Sets the EtherType policy in the target [Ethernet2Config].
    pub fn set_ether_type_policy(mut self, value: EtherTypePolicy) -> Self {
        self.ether_type_policy = value;
        self
    }

    /// Sets the frame check sequence option in the target [Ethernet2Config].
    pub fn set_fcs(mut self, value: bool) -> Self {
        self.fcs = value;
        self
    }

    /// Sets the promiscuous mode option in the target [Ethernet2Config].
    pub fn set_promiscuous(mut self, value: bool) -> Self {
        self.promiscuous = value;
        self
    }

    /// Sets the multicast reception option in the target [Ethernet2Config].
    pub fn set_accept_multicast(mut self, value: bool) -> Self {
        self.accept_multicast = value;
        self
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

/// Default Trait Implementation for Ethernet II Configuration Descriptor
impl Default for Ethernet2Config {
    /// Creates an Ethernet II Configuration Descriptor with the default values.
    fn default() -> Self {
        Ethernet2Config {
            local_link_addr: MacAddress::nil(),
            ether_type_policy: EtherTypePolicy::Report,
            fcs: false,
            promiscuous: false,
            accept_multicast: true,
        }
    }
}

impl FromStr for EtherTypePolicy {
    type Err = Fail;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "report" => Ok(EtherTypePolicy::Report),
            "reject" => Ok(EtherTypePolicy::Reject),
            _ => Err(Fail::new(EINVAL, "unknown EtherType policy")),
        }
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
