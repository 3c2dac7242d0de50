// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod ethernet2;

//==============================================================================
// Exports
//==============================================================================

pub use self::ethernet2::{
    EtherTypePolicy,
    Ethernet2Config,
};
