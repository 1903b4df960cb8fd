// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmtext

//! Error types for the bit-level codec layer.
//!
//! [`CodingError`] covers every failure mode of the entropy coder, the
//! Hamming code, and the code-table wire codec. All variants are
//! deterministic, recoverable conditions surfaced to the caller; nothing
//! here is retried or treated as fatal.

use core::fmt;

/// Result type for codec-layer operations.
pub type Result<T> = core::result::Result<T, CodingError>;

/// Errors that can occur while encoding or decoding the hidden channel's
/// bit streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodingError {
    /// The bit stream could not be resolved against the supplied code table
    /// (truncated or corrupted payload segment).
    MalformedCode,
    /// The serialized code table is not a multiple of 8 bits or failed
    /// structural parsing.
    MalformedCodeTable(&'static str),
    /// A payload symbol has no entry in the code table.
    MissingCode {
        /// The symbol that could not be encoded.
        symbol: u8,
    },
    /// The codeword is corrupted beyond the code's correction capability:
    /// the syndrome points outside the codeword, or decoding still fails
    /// after a single-bit correction.
    Uncorrectable {
        /// 1-indexed position the syndrome pointed at.
        position: usize,
    },
}

impl fmt::Display for CodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedCode => write!(f, "bit stream does not resolve against the code table"),
            Self::MalformedCodeTable(reason) => write!(f, "malformed code table: {reason}"),
            Self::MissingCode { symbol } => {
                write!(f, "code table has no code for symbol 0x{symbol:02X}")
            }
            Self::Uncorrectable { position } => {
                write!(f, "uncorrectable corruption (syndrome position {position})")
            }
        }
    }
}

impl std::error::Error for CodingError {}
