// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Constants
//======================================================================================================================

/// Preamble octet. Also used as the padding octet in front of the start-of-frame delimiter.
pub const ETH_PREAMBLE: u8 = 0x55;

/// Start-of-frame delimiter.
pub const ETH_SFD: u8 = 0xD5;

/// High octet of the EtherType carried by every frame.
pub const ETH_TYPE_H: u8 = 0x60;

/// Low octet of the EtherType carried by every frame.
pub const ETH_TYPE_L: u8 = 0x00;

/// EtherType carried by every frame, in host byte order.
pub const ETH_TYPE: u16 = u16::from_be_bytes([ETH_TYPE_H, ETH_TYPE_L]);

/// Maximum payload size (in bytes).
pub const ETH_NBYTES: usize = 1500;

/// Minimum payload size (in bytes). A minimum frame is 64 bytes, 18 of which are header and FCS.
pub const ETH_MINIMUM_NBYTES: usize = 64 - 18;

/// Length of the preamble region (in bytes): 7 preamble octets plus 2 octets to align data transfers, the last of
/// which is the start-of-frame delimiter.
pub const PREAMBLE_LEN: usize = 9;

/// Number of leading octets of the preamble region that must be [ETH_PREAMBLE].
pub const PREAMBLE_SYNC_LEN: usize = 7;

/// Length of a MAC address (in bytes).
pub const MAC_ADDR_LEN: usize = 6;

/// Length of the frame header (in bytes): destination, source and EtherType.
pub const HDR_LEN: usize = 2 * MAC_ADDR_LEN + 2;

/// Length of the frame check sequence (in bytes).
pub const ETH_FCS_LEN: usize = 4;

/// Smallest frame accepted on the wire, without frame check sequence.
pub const MIN_FRAME_SIZE: usize = PREAMBLE_LEN + HDR_LEN + ETH_MINIMUM_NBYTES;

/// Largest frame accepted on the wire, without frame check sequence.
pub const MAX_FRAME_SIZE: usize = PREAMBLE_LEN + HDR_LEN + ETH_NBYTES;

/// Length of a received frame batch.
pub const RECEIVE_BATCH_SIZE: usize = 4;

//======================================================================================================================
// Unit Tests
//======================================================================================================================
