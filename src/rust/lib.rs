// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#![cfg_attr(feature = "strict", deny(warnings))]
#![deny(clippy::all)]

#[macro_use]
extern crate log;

pub mod config;
pub mod protocols;
pub mod runtime;

pub use self::{
    config::Config,
    protocols::layer2::{
        decode,
        encode,
        DecodeError,
        EncodeError,
        EtherTypePolicy,
        Ethernet2Codec,
        Ethernet2Frame,
        Ethernet2Header,
        Layer2Endpoint,
        PhysicalLayer,
    },
    runtime::{
        fail::Fail,
        network::{
            config::Ethernet2Config,
            types::{
                EtherType2,
                MacAddress,
            },
        },
    },
};

//======================================================================================================================
// Macros
//======================================================================================================================

/// Ensures that two expressions are equivalent, otherwise bails out of the enclosing function with an [anyhow::Error].
#[macro_export]
macro_rules! ensure_eq {
    ($left:expr, $right:expr) => ({
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    anyhow::bail!(r#"ensure failed: `(left == right)`
  left: `{:?}`,
 right: `{:?}`"#, &*left_val, &*right_val)
                }
            }
        }
    });
    ($left:expr, $right:expr,) => ({
        $crate::ensure_eq!($left, $right)
    });
}

/// Ensures that two expressions are not equivalent, otherwise bails out of the enclosing function with an
/// [anyhow::Error].
#[macro_export]
macro_rules! ensure_neq {
    ($left:expr, $right:expr) => ({
        match (&$left, &$right) {
            (left_val, right_val) => {
                if *left_val == *right_val {
                    anyhow::bail!(r#"ensure failed: `(left != right)`
  left: `{:?}`,
 right: `{:?}`"#, &*left_val, &*right_val)
                }
            }
        }
    });
    ($left:expr, $right:expr,) => ({
        $crate::ensure_neq!($left, $right)
    });
}
