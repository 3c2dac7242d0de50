// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::{
    fail::Fail,
    network::{
        config::EtherTypePolicy,
        types::MacAddress,
    },
};
use ::std::{
    fs::File,
    io::Read,
    ops::Index,
    str::FromStr,
};
use ::yaml_rust::{
    Yaml,
    YamlLoader,
};

//======================================================================================================================
// Constants
//======================================================================================================================

// Ethernet II link options.
mod ethernet2_config {
    pub const SECTION_NAME: &str = "ethernet2";
    // Local network MAC address.
    pub const LOCAL_LINK_ADDR: &str = "local_link_addr";
    pub const ETHER_TYPE_POLICY: &str = "ether_type_policy";
    pub const FCS: &str = "fcs";
    pub const PROMISCUOUS: &str = "promiscuous";
    pub const ACCEPT_MULTICAST: &str = "accept_multicast";
}

//======================================================================================================================
// Structures
//======================================================================================================================

/// Link configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Yaml);

//======================================================================================================================
// Associated Functions
//======================================================================================================================

/// Common associated functions for the link configuration object.
impl Config {
    /// Reads a configuration file into a [Config] object.
    pub fn new(config_path: &str) -> Result<Self, Fail> {
        let mut config_s: String = String::new();
        File::open(config_path)?.read_to_string(&mut config_s)?;
        config_s.parse()
    }

    fn get_ethernet2_config(&self) -> Result<&Yaml, Fail> {
        Self::get_subsection(&self.0, ethernet2_config::SECTION_NAME)
    }

    /// Reads the "local link address" parameter from the environment variable first and then underlying
    /// configuration file.
    pub fn local_link_addr(&self) -> Result<MacAddress, Fail> {
        let local_link_addr: MacAddress =
            if let Some(addr) = Self::get_typed_env_option(ethernet2_config::LOCAL_LINK_ADDR)? {
                addr
            } else {
                Self::get_typed_str_option(
                    self.get_ethernet2_config()?,
                    ethernet2_config::LOCAL_LINK_ADDR,
                    |val: &str| MacAddress::parse_canonical_str(val).ok(),
                )?
            };

        if local_link_addr.is_nil() || local_link_addr.is_multicast() {
            let cause: String = format!("invalid local link address: {}", local_link_addr);
            error!("local_link_addr(): {:?}", cause);
            return Err(Fail::new(libc::EINVAL, &cause));
        }
        Ok(local_link_addr)
    }

    /// Reads the policy for unexpected EtherTypes, if present.
    pub fn ether_type_policy(&self) -> Result<Option<EtherTypePolicy>, Fail> {
        if let Some(policy) = Self::get_typed_env_option(ethernet2_config::ETHER_TYPE_POLICY)? {
            return Ok(Some(policy));
        }
        let section: &Yaml = self.get_ethernet2_config()?;
        match Self::get_optional(section, ethernet2_config::ETHER_TYPE_POLICY) {
            Some(_) => Ok(Some(Self::get_typed_str_option(
                section,
                ethernet2_config::ETHER_TYPE_POLICY,
                |val: &str| val.parse().ok(),
            )?)),
            None => Ok(None),
        }
    }

    /// Reads the setting to append and verify frame check sequences, if present.
    pub fn fcs(&self) -> Result<Option<bool>, Fail> {
        self.get_optional_bool(ethernet2_config::FCS)
    }

    /// Reads the setting to accept frames addressed to other stations, if present.
    pub fn promiscuous(&self) -> Result<Option<bool>, Fail> {
        self.get_optional_bool(ethernet2_config::PROMISCUOUS)
    }

    /// Reads the setting to accept frames addressed to multicast groups, if present.
    pub fn accept_multicast(&self) -> Result<Option<bool>, Fail> {
        self.get_optional_bool(ethernet2_config::ACCEPT_MULTICAST)
    }

    /// Reads a boolean from the environment first and then from the Ethernet II section, if present.
    fn get_optional_bool(&self, index: &str) -> Result<Option<bool>, Fail> {
        if let Some(value) = Self::get_typed_env_option(index)? {
            return Ok(Some(value));
        }
        let section: &Yaml = self.get_ethernet2_config()?;
        match Self::get_optional(section, index) {
            Some(_) => Ok(Some(Self::get_bool_option(section, index)?)),
            None => Ok(None),
        }
    }

    //======================================================================================================================
    // Static Functions
    //======================================================================================================================

    /// Similar to `get_typed_option` using `Yaml::as_hash` receiver. This method returns a `&Yaml` instead of
    /// yaml::Hash, and Yaml is more natural for indexing.
    fn get_subsection<'a>(yaml: &'a Yaml, index: &str) -> Result<&'a Yaml, Fail> {
        let section: &'a Yaml = Self::get_option(yaml, index)?;
        match section {
            Yaml::Hash(_) => Ok(section),
            _ => {
                let message: String = format!("parameter \"{}\" has unexpected type", index);
                Err(Fail::new(libc::EINVAL, message.as_str()))
            },
        }
    }

    /// Index `yaml` to find the value at `index`, validating that the index exists.
    fn get_option<'a>(yaml: &'a Yaml, index: &str) -> Result<&'a Yaml, Fail> {
        match Self::get_optional(yaml, index) {
            Some(value) => Ok(value),
            None => {
                let message: String = format!("missing configuration option \"{}\"", index);
                Err(Fail::new(libc::EINVAL, message.as_str()))
            },
        }
    }

    /// Index `yaml` to find the value at `index`, if any.
    fn get_optional<'a>(yaml: &'a Yaml, index: &str) -> Option<&'a Yaml> {
        match yaml.index(index) {
            Yaml::BadValue => None,
            value => Some(value),
        }
    }

    /// Index `yaml` to find the value at `index`, validating that it exists and that the receiver returns Some(_).
    fn get_typed_option<'a, T, Fn>(yaml: &'a Yaml, index: &str, receiver: Fn) -> Result<T, Fail>
    where
        Fn: FnOnce(&'a Yaml) -> Option<T>,
    {
        let option: &'a Yaml = Self::get_option(yaml, index)?;
        match receiver(option) {
            Some(value) => Ok(value),
            None => {
                let message: String = format!("parameter {} has unexpected type", index);
                Err(Fail::new(libc::EINVAL, message.as_str()))
            },
        }
    }

    /// Index `yaml` to find value at `index`, validating it as a string.
    fn get_typed_str_option<T, Fn>(yaml: &Yaml, index: &str, parser: Fn) -> Result<T, Fail>
    where
        Fn: FnOnce(&str) -> Option<T>,
    {
        let option: &Yaml = Self::get_option(yaml, index)?;
        if let Some(value) = option.as_str() {
            if let Some(value) = parser(value) {
                return Ok(value);
            }
        }
        let message: String = format!("parameter {} has unexpected type", index);
        Err(Fail::new(libc::EINVAL, message.as_str()))
    }

    /// Get value where the environment value overrides the config file if it exists.
    fn get_typed_env_option<T: FromStr>(index: &str) -> Result<Option<T>, Fail> {
        // Check for the environment variable.
        if let Ok(var) = ::std::env::var(index.to_uppercase()) {
            if let Ok(value) = var.as_str().parse() {
                return Ok(Some(value));
            } else {
                let message: String = format!("parameter {} has unexpected type", index);
                return Err(Fail::new(libc::EINVAL, message.as_str()));
            }
        }
        Ok(None)
    }

    /// Same as `Self::get_typed_option` using `Yaml::as_bool` as the receiver.
    fn get_bool_option(yaml: &Yaml, index: &str) -> Result<bool, Fail> {
        Self::get_typed_option(yaml, index, &Yaml::as_bool)
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl FromStr for Config {
    type Err = Fail;

    /// Parses a configuration document into a [Config] object.
    fn from_str(config_s: &str) -> Result<Self, Self::Err> {
        let config: Vec<Yaml> = match YamlLoader::load_from_str(config_s) {
            Ok(config) => config,
            Err(e) => {
                let cause: String = format!("malformed configuration: {}", e);
                error!("from_str(): {:?}", cause);
                return Err(Fail::new(libc::EINVAL, &cause));
            },
        };
        let config_obj: &Yaml = match &config[..] {
            [c] => c,
            _ => return Err(Fail::new(libc::EINVAL, "Wrong number of config objects")),
        };

        Ok(Self(config_obj.clone()))
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
