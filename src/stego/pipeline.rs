// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmtext

//! Encode/decode pipeline.
//!
//! Encoding composes the codec stages in order:
//! 1. Huffman-compress the payload and keep the code table
//! 2. Hamming-protect the compressed bits (payload segment only)
//! 3. Serialize the code table to bits (transmitted unprotected)
//! 4. Map both bit runs through the seed-derived channel mapping and frame
//!    them into the carrier
//!
//! Decoding reverses the stages, re-deriving the mapping from the same seed.
//!
//! Only the payload segment is protected by the Hamming code. A single bit
//! error in the code-table segment corrupts the whole decode even though the
//! payload segment would have been recoverable. This asymmetry is part of
//! the wire format and is pinned by the corruption tests.

use crate::coding::{codebook, hamming, huffman, CodeTable, CodingError};
use crate::stego::error::StegoError;
use crate::stego::frame::{self, EmbedPolicy};
use crate::stego::mapping::ChannelMapping;

/// Encode `payload` invisibly into `carrier` with the default
/// [`EmbedPolicy::Append`] placement.
///
/// # Errors
/// [`StegoError::ReservedCharInCarrier`] if the carrier already contains a
/// zero-width channel character or the separator.
pub fn encode_message(carrier: &str, payload: &[u8], seed: u64) -> Result<String, StegoError> {
    encode_message_with_policy(carrier, payload, seed, EmbedPolicy::default())
}

/// Encode `payload` invisibly into `carrier` with an explicit placement
/// policy.
///
/// The visible text of the result is byte-identical to `carrier`; the
/// payload travels entirely in zero-width characters.
pub fn encode_message_with_policy(
    carrier: &str,
    payload: &[u8],
    seed: u64,
    policy: EmbedPolicy,
) -> Result<String, StegoError> {
    let mapping = ChannelMapping::generate(seed);

    // 1. Entropy-code the payload. An empty payload has no tree; both
    //    segments stay empty and only the separator is embedded.
    let (payload_bits, table) = match huffman::build_tree(payload) {
        Some(tree) => {
            let table = huffman::build_table(&tree);
            (huffman::encode(payload, &table)?, table)
        }
        None => (Vec::new(), CodeTable::new()),
    };

    // 2. Protect the payload segment.
    let codeword = hamming::encode(&payload_bits);

    // 3. Serialize the code table. No parity here: the table segment is
    //    transmitted unprotected.
    let table_bits = codebook::serialize(&table);

    // 4. Frame both segments into the carrier.
    frame::embed(carrier, &table_bits, &codeword, &mapping, policy)
}

/// Recover the payload hidden in `stego` with the seed used to encode it.
///
/// Corrects at most one flipped bit in the payload segment.
///
/// # Errors
/// - [`StegoError::SeparatorNotFound`] / [`StegoError::MultipleSeparators`]
///   if the framing is violated.
/// - [`CodingError::MalformedCodeTable`] if the table segment does not parse.
/// - [`CodingError::Uncorrectable`] if the payload segment is corrupted
///   beyond a single bit.
/// - [`CodingError::MalformedCode`] if the payload bits do not resolve
///   against the table (truncated channel).
pub fn decode_message(stego: &str, seed: u64) -> Result<Vec<u8>, StegoError> {
    let mapping = ChannelMapping::generate(seed);

    // 1. Pull both bit runs back out of the text.
    let (table_bits, codeword) = frame::extract(stego, &mapping)?;

    // 2. Undo the Hamming protection on the payload segment.
    let decoded = hamming::decode(&codeword)?;

    // 3. Rebuild the code table from its unprotected segment.
    let table = codebook::deserialize(&table_bits)?;

    // 4. Entropy-decode. A malformed stream after a correction was applied
    //    means the corruption exceeded the code's capability.
    match huffman::decode(&decoded.data, &table) {
        Ok(payload) => Ok(payload),
        Err(CodingError::MalformedCode) => {
            if let Some(position) = decoded.corrected {
                Err(CodingError::Uncorrectable { position }.into())
            } else {
                Err(CodingError::MalformedCode.into())
            }
        }
        Err(e) => Err(e.into()),
    }
}

/// Number of channel characters [`encode_message`] adds for `payload`:
/// one per code-table bit, one separator, one per payload codeword bit.
///
/// Lets callers size a carrier before embedding.
pub fn channel_length(payload: &[u8]) -> usize {
    match huffman::build_tree(payload) {
        Some(tree) => {
            let table = huffman::build_table(&tree);
            // The table was built from this payload, so encode cannot fail.
            let payload_bits = huffman::encode(payload, &table).unwrap_or_default();
            codebook::serialize(&table).len() + 1 + hamming::encode(&payload_bits).len()
        }
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::frame::SEPARATOR;

    #[test]
    fn roundtrip_basic() {
        let stego = encode_message("The quick fox.", b"hi", 42).unwrap();
        assert_eq!(decode_message(&stego, 42).unwrap(), b"hi");
    }

    #[test]
    fn roundtrip_empty_payload() {
        let stego = encode_message("The quick fox.", b"", 42).unwrap();
        // Both segments empty: the channel is exactly one separator.
        let invisible: Vec<char> = stego
            .chars()
            .filter(|c| !"The quick fox.".contains(*c))
            .collect();
        assert_eq!(invisible, vec![SEPARATOR]);
        assert_eq!(decode_message(&stego, 42).unwrap(), b"");
    }

    #[test]
    fn roundtrip_single_distinct_symbol() {
        let stego = encode_message("carrier", b"aaaa", 7).unwrap();
        assert_eq!(decode_message(&stego, 7).unwrap(), b"aaaa");
    }

    #[test]
    fn decode_plain_text_fails() {
        assert_eq!(
            decode_message("no hidden channel here", 42),
            Err(StegoError::SeparatorNotFound)
        );
    }

    #[test]
    fn channel_length_matches_embedding() {
        let payload = b"some payload bytes";
        let stego = encode_message("x", payload, 5).unwrap();
        // Channel characters = everything after the 1-char carrier.
        assert_eq!(stego.chars().count() - 1, channel_length(payload));
    }
}
