// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod codec;
mod errors;
pub mod fcs;
mod frame;
mod header;

//======================================================================================================================
// Exports
//======================================================================================================================

pub use self::{
    codec::Ethernet2Codec,
    errors::{
        DecodeError,
        EncodeError,
    },
    frame::{
        decode,
        encode,
        Ethernet2Frame,
    },
    header::Ethernet2Header,
};
