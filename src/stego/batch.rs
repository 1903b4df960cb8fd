// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmtext

//! Batch evaluation over independent (carrier, payload) pairs.
//!
//! Each pair's encode/decode is independent: no shared state, no cross-pair
//! coordination, results index-stable with the input. With the `parallel`
//! feature enabled the pairs run on rayon worker threads; otherwise the same
//! loop runs serially.

use crate::stego::error::StegoError;
use crate::stego::frame::EmbedPolicy;
use crate::stego::pipeline::{decode_message, encode_message_with_policy};

/// Encode then decode one pair, returning the recovered payload.
///
/// This is the success criterion a caller records when evaluating the codec
/// over a corpus: the result is `Ok` exactly when the payload survives the
/// full embed/extract cycle.
pub fn roundtrip(carrier: &str, payload: &[u8], seed: u64) -> Result<Vec<u8>, StegoError> {
    let stego = encode_message_with_policy(carrier, payload, seed, EmbedPolicy::default())?;
    decode_message(&stego, seed)
}

/// Run [`roundtrip`] over many pairs with one policy and seed.
///
/// Results line up with the input by index. Runs pairs in parallel when the
/// `parallel` feature is enabled.
#[cfg(not(feature = "parallel"))]
pub fn roundtrip_all(
    pairs: &[(&str, &[u8])],
    seed: u64,
    policy: EmbedPolicy,
) -> Vec<Result<Vec<u8>, StegoError>> {
    pairs
        .iter()
        .map(|&(carrier, payload)| {
            let stego = encode_message_with_policy(carrier, payload, seed, policy)?;
            decode_message(&stego, seed)
        })
        .collect()
}

/// Run [`roundtrip`] over many pairs with one policy and seed.
///
/// Results line up with the input by index. Pairs run on rayon worker
/// threads; there is no ordering guarantee between pairs beyond that.
#[cfg(feature = "parallel")]
pub fn roundtrip_all(
    pairs: &[(&str, &[u8])],
    seed: u64,
    policy: EmbedPolicy,
) -> Vec<Result<Vec<u8>, StegoError>> {
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|&(carrier, payload)| {
            let stego = encode_message_with_policy(carrier, payload, seed, policy)?;
            decode_message(&stego, seed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pair_roundtrip() {
        assert_eq!(
            roundtrip("some cover text", b"payload", 42).unwrap(),
            b"payload"
        );
    }

    #[test]
    fn batch_results_are_index_stable() {
        let pairs: Vec<(&str, &[u8])> = vec![
            ("first carrier", b"one".as_slice()),
            ("second carrier", b"two".as_slice()),
            ("third carrier", b"".as_slice()),
        ];
        let results = roundtrip_all(&pairs, 7, EmbedPolicy::Append);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_deref(), Ok(b"one".as_slice()));
        assert_eq!(results[1].as_deref(), Ok(b"two".as_slice()));
        assert_eq!(results[2].as_deref(), Ok(b"".as_slice()));
    }

    #[test]
    fn bad_pairs_fail_independently() {
        let bad = "carrier with \u{200D} inside";
        let pairs: Vec<(&str, &[u8])> = vec![
            (bad, b"x".as_slice()),
            ("clean carrier", b"y".as_slice()),
        ];
        let results = roundtrip_all(&pairs, 1, EmbedPolicy::Interleave);
        assert!(results[0].is_err());
        assert_eq!(results[1].as_deref(), Ok(b"y".as_slice()));
    }
}
