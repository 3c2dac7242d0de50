// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod common;

//==============================================================================
// Imports
//==============================================================================

use ::anyhow::Result;
use ::crossbeam_channel::{
    Receiver,
    Sender,
};
use ::ethframe::{
    decode,
    encode,
    runtime::network::consts::{
        ETH_MINIMUM_NBYTES,
        ETH_NBYTES,
        MIN_FRAME_SIZE,
    },
    DecodeError,
    EncodeError,
    EtherType2,
    Ethernet2Frame,
    MacAddress,
};
use ::rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};
use ::std::thread::{
    self,
    JoinHandle,
};
use common::{
    ALICE_MAC,
    BOB_MAC,
};

//==============================================================================
// Helpers
//==============================================================================

/// Zero-pads [payload] the way the encoder does.
fn pad(payload: &[u8]) -> Vec<u8> {
    let mut padded: Vec<u8> = payload.to_vec();
    padded.resize(payload.len().max(ETH_MINIMUM_NBYTES), 0);
    padded
}

fn random_mac(rng: &mut SmallRng) -> MacAddress {
    MacAddress::new(rng.gen())
}

//==============================================================================
// Round Trips
//==============================================================================

/// Decoding an encoded frame gives back the addresses and the padded payload, for payloads of any valid size.
#[test]
fn decode_inverts_encode() -> Result<()> {
    let mut rng: SmallRng = SmallRng::seed_from_u64(0x6000);
    let mut sizes: Vec<usize> = vec![0, 1, 45, 46, 47, 1499, 1500];
    sizes.extend((0..64).map(|_| rng.gen_range(0..=ETH_NBYTES)));

    for size in sizes {
        let dst: MacAddress = random_mac(&mut rng);
        let src: MacAddress = random_mac(&mut rng);
        let mut payload: Vec<u8> = vec![0; size];
        rng.fill(&mut payload[..]);

        let frame: Vec<u8> = encode(dst, src, &payload)?;
        ethframe::ensure_eq!(frame.len(), 9 + 14 + size.max(46));

        let decoded: Ethernet2Frame = decode(&frame)?;
        ethframe::ensure_eq!(decoded.dst_addr(), dst);
        ethframe::ensure_eq!(decoded.src_addr(), src);
        ethframe::ensure_eq!(decoded.ether_type_valid(), true);
        ethframe::ensure_eq!(decoded.payload(), &pad(&payload)[..]);
    }
    Ok(())
}

//==============================================================================
// Wire Format
//==============================================================================

#[test]
fn encode_concrete_frame() -> Result<()> {
    let dst: MacAddress = MacAddress::new([0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    let src: MacAddress = MacAddress::new([0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c]);
    let frame: Vec<u8> = encode(dst, src, &[0xaa; 10])?;

    #[rustfmt::skip]
    let header: [u8; 23] = [
        0x55, 0x55, 0x55, 0x55, 0x55, 0x55, 0x55,
        0x55, 0xd5,
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06,
        0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
        0x60, 0x00,
    ];
    ethframe::ensure_eq!(frame.len(), 69);
    ethframe::ensure_eq!(&frame[..23], &header[..]);
    ethframe::ensure_eq!(&frame[23..33], &[0xaa; 10][..]);
    ethframe::ensure_eq!(&frame[33..], &[0x00; 36][..]);
    Ok(())
}

#[test]
fn encode_empty_payload() -> Result<()> {
    let frame: Vec<u8> = encode(ALICE_MAC, BOB_MAC, &[])?;
    ethframe::ensure_eq!(frame.len(), MIN_FRAME_SIZE);
    ethframe::ensure_eq!(frame[23..].iter().all(|octet| *octet == 0), true);
    Ok(())
}

#[test]
fn encode_oversized_payload() -> Result<()> {
    ethframe::ensure_eq!(
        encode(ALICE_MAC, BOB_MAC, &[0x00; 1501]),
        Err(EncodeError::PayloadTooLarge { len: 1501, max: 1500 })
    );
    Ok(())
}

//==============================================================================
// Malformed Frames
//==============================================================================

#[test]
fn decode_short_buffers() -> Result<()> {
    for len in [0, 1, 9, 23, 68] {
        ethframe::ensure_eq!(decode(&vec![0x55; len]), Err(DecodeError::Truncated { len, min: 69 }));
    }
    Ok(())
}

#[test]
fn decode_bad_preamble() -> Result<()> {
    let mut frame: Vec<u8> = encode(ALICE_MAC, BOB_MAC, b"preamble")?;
    frame[0] = 0x00;
    ethframe::ensure_eq!(decode(&frame), Err(DecodeError::BadPreamble { offset: 0, found: 0x00 }));
    Ok(())
}

#[test]
fn decode_bad_delimiter() -> Result<()> {
    let mut frame: Vec<u8> = encode(ALICE_MAC, BOB_MAC, b"delimiter")?;
    frame[8] = 0x55;
    ethframe::ensure_eq!(decode(&frame), Err(DecodeError::BadDelimiter { found: [0x55, 0x55] }));
    Ok(())
}

#[test]
fn decode_foreign_ether_type() -> Result<()> {
    let mut frame: Vec<u8> = encode(ALICE_MAC, BOB_MAC, b"ipv4")?;
    frame[21] = 0x08;
    frame[22] = 0x00;
    let decoded: Ethernet2Frame = decode(&frame)?;
    ethframe::ensure_eq!(decoded.ether_type_valid(), false);
    ethframe::ensure_eq!(decoded.ether_type(), EtherType2::new(0x0800));
    ethframe::ensure_eq!(decoded.dst_addr(), ALICE_MAC);
    ethframe::ensure_eq!(decoded.src_addr(), BOB_MAC);
    Ok(())
}

//==============================================================================
// Concurrency
//==============================================================================

/// The codec holds no state, so any number of threads may use it at once.
#[test]
fn concurrent_encode_decode() -> Result<()> {
    const NUM_THREADS: u64 = 4;
    const FRAMES_PER_THREAD: usize = 256;
    let (tx, rx): (Sender<Result<usize, String>>, Receiver<Result<usize, String>>) = crossbeam_channel::unbounded();

    let mut handles: Vec<JoinHandle<()>> = Vec::new();
    for id in 0..NUM_THREADS {
        let tx: Sender<Result<usize, String>> = tx.clone();
        handles.push(thread::spawn(move || {
            let mut rng: SmallRng = SmallRng::seed_from_u64(id);
            let mut checked: usize = 0;
            for _ in 0..FRAMES_PER_THREAD {
                let mut payload: Vec<u8> = vec![0; rng.gen_range(0..=ETH_NBYTES)];
                rng.fill(&mut payload[..]);
                let outcome: Result<bool, String> = encode(ALICE_MAC, BOB_MAC, &payload)
                    .map_err(|e| e.to_string())
                    .and_then(|frame| match decode(&frame) {
                        Ok(decoded) => Ok(decoded.payload() == &pad(&payload)[..]),
                        Err(e) => Err(e.to_string()),
                    });
                match outcome {
                    Ok(true) => checked += 1,
                    Ok(false) => {
                        let _ = tx.send(Err(format!("thread {}: payload mismatch", id)));
                        return;
                    },
                    Err(e) => {
                        let _ = tx.send(Err(format!("thread {}: {}", id, e)));
                        return;
                    },
                }
            }
            let _ = tx.send(Ok(checked));
        }));
    }
    drop(tx);

    let mut total: usize = 0;
    for result in rx.iter() {
        match result {
            Ok(checked) => total += checked,
            Err(cause) => anyhow::bail!(cause),
        }
    }
    for handle in handles {
        if handle.join().is_err() {
            anyhow::bail!("codec thread panicked");
        }
    }
    ethframe::ensure_eq!(total, NUM_THREADS as usize * FRAMES_PER_THREAD);
    Ok(())
}
