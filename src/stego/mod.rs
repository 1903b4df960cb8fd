// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmtext

//! Steganographic encoding and decoding.
//!
//! Hides a byte payload inside carrier text using zero-width Unicode
//! characters. The payload is Huffman-compressed, the compressed bits are
//! Hamming-protected against a single flipped bit, and the Huffman code
//! table travels inline ahead of a separator so the stego text is fully
//! self-describing: decoding needs only the text and the seed.
//!
//! The visible text is byte-identical before and after embedding; stripping
//! every zero-width channel character and the separator reproduces the
//! carrier exactly.

pub mod batch;
pub mod error;
pub mod frame;
pub mod mapping;
mod pipeline;

pub use error::StegoError;
pub use frame::{EmbedPolicy, SEPARATOR};
pub use mapping::{ChannelMapping, CHANNEL_ALPHABET};
pub use pipeline::{channel_length, decode_message, encode_message, encode_message_with_policy};
