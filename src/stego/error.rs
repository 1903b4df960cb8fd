// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmtext

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from carrier validation through
//! channel extraction and payload recovery. Codec-layer failures are wrapped
//! rather than flattened so callers can still match on the exact condition.

use core::fmt;

use crate::coding::CodingError;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The carrier text already contains a channel character or the
    /// separator, which would corrupt the framing.
    ReservedCharInCarrier(char),
    /// The extracted channel contains no separator between the code-table
    /// segment and the payload segment.
    SeparatorNotFound,
    /// The extracted channel contains more than one separator.
    MultipleSeparators,
    /// A codec-layer failure while recovering the payload.
    Coding(CodingError),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedCharInCarrier(c) => {
                write!(f, "carrier contains reserved character U+{:04X}", *c as u32)
            }
            Self::SeparatorNotFound => write!(f, "no separator found in stego text"),
            Self::MultipleSeparators => write!(f, "multiple separators found in stego text"),
            Self::Coding(e) => write!(f, "codec error: {e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Coding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodingError> for StegoError {
    fn from(e: CodingError) -> Self {
        Self::Coding(e)
    }
}
