// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmtext

//! Invisible-channel framing.
//!
//! The hidden channel rides inside the carrier text as a run of zero-width
//! characters. In channel order:
//!
//! ```text
//! [code-table bits, one channel character per bit]
//! [1 separator character U+200D]
//! [payload codeword bits, one channel character per bit]
//! ```
//!
//! Two embedding policies place the channel characters into the carrier;
//! both preserve the carrier exactly: stripping every channel character and
//! the separator from the stego text reproduces the carrier character for
//! character.

use super::error::StegoError;
use super::mapping::ChannelMapping;

/// Separator between the code-table segment and the payload segment.
/// Zero-width joiner; reserved, never produced by the channel mapping.
pub const SEPARATOR: char = '\u{200D}';

/// Where the channel characters go relative to the carrier text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmbedPolicy {
    /// Append the whole channel after the carrier.
    #[default]
    Append,
    /// Insert one channel character after each whitespace-delimited word of
    /// the carrier (original whitespace untouched), remainder appended at
    /// the end. Avoids a single bulk run of invisible characters.
    Interleave,
}

/// Embed the framed channel into `carrier`.
///
/// # Errors
/// [`StegoError::ReservedCharInCarrier`] if the carrier already contains a
/// channel character or the separator. Such a carrier would make extraction
/// ambiguous, so it is rejected up front rather than silently mangled.
pub fn embed(
    carrier: &str,
    table_bits: &[u8],
    payload_codeword: &[u8],
    mapping: &ChannelMapping,
    policy: EmbedPolicy,
) -> Result<String, StegoError> {
    for c in carrier.chars() {
        if mapping.is_channel_char(c) || c == SEPARATOR {
            return Err(StegoError::ReservedCharInCarrier(c));
        }
    }

    let mut channel = Vec::with_capacity(table_bits.len() + 1 + payload_codeword.len());
    channel.extend(table_bits.iter().map(|&bit| mapping.char_for(bit)));
    channel.push(SEPARATOR);
    channel.extend(payload_codeword.iter().map(|&bit| mapping.char_for(bit)));

    Ok(match policy {
        EmbedPolicy::Append => {
            let mut stego = String::with_capacity(carrier.len() + channel.len() * 3);
            stego.push_str(carrier);
            stego.extend(channel);
            stego
        }
        EmbedPolicy::Interleave => interleave(carrier, &channel),
    })
}

/// Insert one channel character after each word of `carrier`, in place, and
/// append whatever channel remains at the end.
fn interleave(carrier: &str, channel: &[char]) -> String {
    let mut stego = String::with_capacity(carrier.len() + channel.len() * 3);
    let mut next = channel.iter();
    let mut in_word = false;

    for c in carrier.chars() {
        if c.is_whitespace() {
            if in_word {
                if let Some(&ch) = next.next() {
                    stego.push(ch);
                }
                in_word = false;
            }
        } else {
            in_word = true;
        }
        stego.push(c);
    }
    if in_word {
        if let Some(&ch) = next.next() {
            stego.push(ch);
        }
    }
    stego.extend(next);
    stego
}

/// Extract the framed channel from `stego`.
///
/// Filters the text down to channel characters and the separator, then
/// splits at the separator and inverts the mapping per character.
///
/// # Errors
/// - [`StegoError::SeparatorNotFound`] if no separator is present.
/// - [`StegoError::MultipleSeparators`] if more than one is present.
pub fn extract(
    stego: &str,
    mapping: &ChannelMapping,
) -> Result<(Vec<u8>, Vec<u8>), StegoError> {
    let mut table_bits = Vec::new();
    let mut payload_bits = Vec::new();
    let mut separators = 0usize;

    for c in stego.chars() {
        if c == SEPARATOR {
            separators += 1;
            if separators > 1 {
                return Err(StegoError::MultipleSeparators);
            }
        } else if let Some(bit) = mapping.bit_for(c) {
            if separators == 0 {
                table_bits.push(bit);
            } else {
                payload_bits.push(bit);
            }
        }
    }

    if separators == 0 {
        return Err(StegoError::SeparatorNotFound);
    }
    Ok((table_bits, payload_bits))
}
