// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmtext

//! Hamming single-error-correcting code.
//!
//! Systematic encoding: parity bits occupy the power-of-two positions
//! (1-indexed) of the codeword, data bits fill the remaining positions in
//! order. Each parity bit is the XOR of all codeword bits at positions whose
//! index has that parity bit's position set. Decoding recomputes the checks;
//! the sum of failing parity positions is the 1-indexed error position, which
//! is flipped before the parity bits are stripped.
//!
//! The code corrects any single flipped bit. Two or more flipped bits are
//! either miscorrected or rejected when the syndrome points past the end of
//! the codeword — a known property of single-error-correcting codes, covered
//! by a limitation test rather than worked around.

use log::debug;

use super::error::{CodingError, Result};

/// Outcome of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered data bits, parity positions stripped.
    pub data: Vec<u8>,
    /// 1-indexed codeword position that was flipped, if any check failed.
    pub corrected: Option<usize>,
}

/// Number of parity bits for `data_len` data bits: minimal `r` with
/// `2^r >= data_len + r + 1`. Zero-length data needs no parity bits.
fn parity_count(data_len: usize) -> usize {
    let mut r = 0usize;
    while (1usize << r) < data_len + r + 1 {
        r += 1;
    }
    r
}

/// Encode `data` into a systematic Hamming codeword.
///
/// Zero-length input yields a zero-length codeword.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let r = parity_count(data.len());
    let n = data.len() + r;

    let mut codeword = vec![0u8; n];
    let mut j = 0;
    for pos in 1..=n {
        if !pos.is_power_of_two() {
            // Data bits fill the non-power-of-two positions in order.
            codeword[pos - 1] = data[j];
            j += 1;
        }
    }

    for i in 0..r {
        let parity_pos = 1usize << i;
        let mut parity = 0u8;
        for pos in 1..=n {
            if pos & parity_pos != 0 {
                parity ^= codeword[pos - 1];
            }
        }
        codeword[parity_pos - 1] = parity;
    }

    codeword
}

/// Decode a Hamming codeword, correcting at most one flipped bit.
///
/// # Errors
/// [`CodingError::Uncorrectable`] if the syndrome points outside the
/// codeword — only possible when two or more bits were flipped. Note that
/// multi-bit corruption can also produce an in-range syndrome, in which case
/// the wrong bit is silently "corrected"; callers that can validate the data
/// downstream should treat a post-correction failure as uncorrectable.
pub fn decode(codeword: &[u8]) -> Result<Decoded> {
    let n = codeword.len();
    let mut codeword = codeword.to_vec();

    let mut syndrome = 0usize;
    let mut parity_pos = 1usize;
    while parity_pos <= n {
        let mut parity = 0u8;
        for pos in 1..=n {
            if pos & parity_pos != 0 {
                parity ^= codeword[pos - 1];
            }
        }
        if parity != 0 {
            syndrome += parity_pos;
        }
        parity_pos <<= 1;
    }

    if syndrome > n {
        return Err(CodingError::Uncorrectable { position: syndrome });
    }

    let corrected = if syndrome > 0 {
        debug!("corrected single-bit error at codeword position {syndrome}");
        codeword[syndrome - 1] ^= 1;
        Some(syndrome)
    } else {
        None
    };

    let data = (1..=n)
        .filter(|pos| !pos.is_power_of_two())
        .map(|pos| codeword[pos - 1])
        .collect();

    Ok(Decoded { data, corrected })
}
