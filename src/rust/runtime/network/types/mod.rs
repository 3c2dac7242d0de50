// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod ethertype;
mod macaddr;

//==============================================================================
// Exports
//==============================================================================

pub use self::{
    ethertype::EtherType2,
    macaddr::MacAddress,
};
