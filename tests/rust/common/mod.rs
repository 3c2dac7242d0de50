// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//==============================================================================
// Imports
//==============================================================================

use ::arrayvec::ArrayVec;
use ::ethframe::{
    runtime::network::consts::RECEIVE_BATCH_SIZE,
    Fail,
    MacAddress,
    PhysicalLayer,
};
use ::std::{
    cell::RefCell,
    collections::VecDeque,
    rc::Rc,
};

//==============================================================================
// Constants
//==============================================================================

#[allow(dead_code)]
pub const ALICE_MAC: MacAddress = MacAddress::new([0x12, 0x23, 0x45, 0x67, 0x89, 0xab]);
#[allow(dead_code)]
pub const BOB_MAC: MacAddress = MacAddress::new([0x24, 0x68, 0xac, 0xe0, 0x13, 0x57]);
#[allow(dead_code)]
pub const CARRIE_MAC: MacAddress = MacAddress::new([0x36, 0x9c, 0x02, 0x58, 0xbe, 0x14]);

//==============================================================================
// Structures
//==============================================================================

/// One direction of a point-to-point link.
#[allow(dead_code)]
pub type Wire = Rc<RefCell<VecDeque<Vec<u8>>>>;

/// Physical layer that transmits on one wire and receives from another.
#[allow(dead_code)]
pub struct LoopbackLayer {
    tx: Wire,
    rx: Wire,
}

//==============================================================================
// Associated Functions
//==============================================================================

#[allow(dead_code)]
impl LoopbackLayer {
    /// Creates the two ends of a point-to-point link.
    pub fn pair() -> (Self, Self) {
        let a_to_b: Wire = Rc::new(RefCell::new(VecDeque::new()));
        let b_to_a: Wire = Rc::new(RefCell::new(VecDeque::new()));
        (
            Self {
                tx: a_to_b.clone(),
                rx: b_to_a.clone(),
            },
            Self { tx: b_to_a, rx: a_to_b },
        )
    }

    /// Returns the wire this end transmits on, for tampering with frames in flight.
    pub fn tx_wire(&self) -> Wire {
        self.tx.clone()
    }
}

//==============================================================================
// Trait Implementations
//==============================================================================

impl PhysicalLayer for LoopbackLayer {
    fn transmit(&mut self, frame: Vec<u8>) -> Result<(), Fail> {
        self.tx.borrow_mut().push_back(frame);
        Ok(())
    }

    fn receive(&mut self) -> ArrayVec<Vec<u8>, RECEIVE_BATCH_SIZE> {
        let mut rx = self.rx.borrow_mut();
        let mut batch: ArrayVec<Vec<u8>, RECEIVE_BATCH_SIZE> = ArrayVec::new();
        while !batch.is_full() {
            match rx.pop_front() {
                Some(frame) => batch.push(frame),
                None => break,
            }
        }
        batch
    }
}
