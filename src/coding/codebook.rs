// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmtext

//! Code-table wire codec.
//!
//! The code table must travel inside the same invisible channel as the
//! payload, so it is rendered to a canonical byte sequence and expanded to
//! bits. Entries are written in ascending symbol order, which makes repeated
//! serialization of the same table byte-identical.
//!
//! ```text
//! per entry, ascending by symbol:
//! [1 byte ] symbol
//! [1 byte ] code length in bits (1-255, never 0)
//! [k bytes] code bits, MSB-first, zero-padded (k = ceil(len / 8))
//! ```
//!
//! The empty table serializes to a zero-length bit string.

use super::bits::{bits_to_bytes, bytes_to_bits};
use super::error::{CodingError, Result};
use super::huffman::CodeTable;

/// Serialize `table` to its canonical bit representation.
pub fn serialize(table: &CodeTable) -> Vec<u8> {
    let mut bytes = Vec::new();
    for (symbol, code) in table.iter() {
        debug_assert!(!code.is_empty() && code.len() <= 255);
        bytes.push(symbol);
        bytes.push(code.len() as u8);
        bytes.extend_from_slice(&bits_to_bytes(code));
    }
    bytes_to_bits(&bytes)
}

/// Deserialize a bit string produced by [`serialize`].
///
/// # Errors
/// [`CodingError::MalformedCodeTable`] if the bit count is not a multiple of
/// 8 or the decoded bytes do not parse as a valid table structure.
pub fn deserialize(bits: &[u8]) -> Result<CodeTable> {
    if bits.len() % 8 != 0 {
        return Err(CodingError::MalformedCodeTable(
            "bit count is not a multiple of 8",
        ));
    }
    let bytes = bits_to_bytes(bits);

    let mut table = CodeTable::new();
    let mut i = 0usize;
    while i < bytes.len() {
        if bytes.len() - i < 2 {
            return Err(CodingError::MalformedCodeTable("truncated entry header"));
        }
        let symbol = bytes[i];
        let len = bytes[i + 1] as usize;
        if len == 0 {
            return Err(CodingError::MalformedCodeTable("zero-length code"));
        }
        i += 2;

        let k = (len + 7) / 8;
        if bytes.len() - i < k {
            return Err(CodingError::MalformedCodeTable("truncated code bits"));
        }
        let code_bits = bytes_to_bits(&bytes[i..i + k]);
        if code_bits[len..].iter().any(|&bit| bit != 0) {
            return Err(CodingError::MalformedCodeTable("nonzero code padding"));
        }
        if table.code(symbol).is_some() {
            return Err(CodingError::MalformedCodeTable("duplicate symbol"));
        }
        table.insert(symbol, code_bits[..len].to_vec());
        i += k;
    }

    Ok(table)
}
