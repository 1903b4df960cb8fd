// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmtext

//! # phasm-text
//!
//! Pure-Rust text steganography engine for hiding byte payloads in plain
//! text via zero-width Unicode characters. The pipeline:
//!
//! - **Huffman** entropy coding compresses the payload and produces a
//!   self-describing code table that travels inside the hidden channel.
//! - **Hamming** single-error correction protects the compressed payload
//!   bits, so one flipped bit in transit is recovered transparently.
//! - A **seed-derived channel mapping** assigns the bit values to two
//!   zero-width code points; the same seed re-derives the identical mapping
//!   on decode, with no shared state between calls.
//!
//! The visible carrier text is byte-identical before and after embedding.
//! The codec layer (`coding` module) does no I/O and holds no state across
//! calls; the steganography layer (`stego` module) adds the seeded mapping
//! and the framing.
//!
//! # Quick start
//!
//! ```rust
//! use phasm_text::{encode_message, decode_message};
//!
//! let stego = encode_message("The quick fox.", b"hi", 42).unwrap();
//! assert_eq!(decode_message(&stego, 42).unwrap(), b"hi");
//! ```

pub mod coding;
pub mod stego;

pub use coding::{CodeTable, CodingError, HuffmanNode};
pub use stego::{
    channel_length, decode_message, encode_message, encode_message_with_policy, ChannelMapping,
    EmbedPolicy, StegoError, CHANNEL_ALPHABET, SEPARATOR,
};
