// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmtext

//! Huffman entropy coding for payload compression.
//!
//! Builds a minimal-redundancy prefix code from the symbol frequencies of a
//! byte payload, encodes the payload into a bit string, and decodes it back
//! given the same code table. Tree construction is fully deterministic:
//! ties in the priority queue are broken by insertion sequence, so the same
//! payload always yields the same tree shape and the same code table.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use super::error::{CodingError, Result};

/// A node in the Huffman tree. Leaves hold a payload symbol; internal nodes
/// hold only the combined frequency of their subtree.
#[derive(Debug)]
pub enum HuffmanNode {
    /// A leaf holding one payload symbol and its frequency.
    Leaf {
        /// The payload byte this leaf encodes.
        symbol: u8,
        /// Occurrence count of the symbol in the payload.
        freq: usize,
    },
    /// An internal node with two children and their combined frequency.
    Internal {
        /// Sum of both subtree frequencies.
        freq: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }
}

/// Prefix-free mapping from payload symbols to variable-length bit codes.
///
/// Backed by a `BTreeMap` so iteration is always in ascending symbol order,
/// which makes the serialized form canonical (see
/// [`codebook`](crate::coding::codebook)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Vec<u8>>,
}

impl CodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code for `symbol`, replacing any previous entry.
    pub fn insert(&mut self, symbol: u8, code: Vec<u8>) {
        self.codes.insert(symbol, code);
    }

    /// Look up the code for `symbol`.
    pub fn code(&self, symbol: u8) -> Option<&[u8]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_slice()))
    }
}

/// Heap entry wrapping a tree node with an insertion sequence number.
///
/// `BinaryHeap` is a max-heap with no stable ordering among equal keys, so
/// the comparison is inverted to get min-first behavior and ties are broken
/// by `seq`. This pins the tree shape for a given payload.
struct HeapEntry {
    node: Box<HuffmanNode>,
    seq: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node.freq() == other.node.freq() && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse: lower frequency (then earlier insertion) comes first.
        other
            .node
            .freq()
            .cmp(&self.node.freq())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Count symbol frequencies, preserving first-occurrence order.
///
/// The order matters: leaves enter the priority queue in this order, and the
/// sequence-number tie-break makes the resulting tree a pure function of it.
pub fn count_frequencies(payload: &[u8]) -> Vec<(u8, usize)> {
    let mut counts = [0usize; 256];
    let mut order = Vec::new();
    for &byte in payload {
        if counts[byte as usize] == 0 {
            order.push(byte);
        }
        counts[byte as usize] += 1;
    }
    order
        .into_iter()
        .map(|symbol| (symbol, counts[symbol as usize]))
        .collect()
}

/// Build the Huffman tree for `payload`.
///
/// Repeatedly merges the two lowest-frequency nodes until one remains.
/// Returns `None` for an empty payload (there is nothing to encode and no
/// usable tree).
pub fn build_tree(payload: &[u8]) -> Option<Box<HuffmanNode>> {
    let freqs = count_frequencies(payload);
    if freqs.is_empty() {
        return None;
    }

    let mut heap = BinaryHeap::with_capacity(freqs.len());
    let mut seq = 0usize;
    for (symbol, freq) in freqs {
        heap.push(HeapEntry {
            node: Box::new(HuffmanNode::Leaf { symbol, freq }),
            seq,
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let left = heap.pop().unwrap().node;
        let right = heap.pop().unwrap().node;
        let merged = HuffmanNode::Internal {
            freq: left.freq() + right.freq(),
            left,
            right,
        };
        heap.push(HeapEntry {
            node: Box::new(merged),
            seq,
        });
        seq += 1;
    }

    heap.pop().map(|entry| entry.node)
}

/// Build the code table by depth-first traversal of the tree.
///
/// Left branches append `0`, right branches append `1`. A leaf at the root
/// (payload with a single distinct symbol) receives the 1-bit code `[0]` so
/// the table is still usable.
pub fn build_table(root: &HuffmanNode) -> CodeTable {
    let mut table = CodeTable::new();
    assign_codes(root, Vec::new(), &mut table);
    table
}

fn assign_codes(node: &HuffmanNode, prefix: Vec<u8>, table: &mut CodeTable) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() { vec![0] } else { prefix };
            table.insert(*symbol, code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(0);
            assign_codes(left, left_prefix, table);
            let mut right_prefix = prefix;
            right_prefix.push(1);
            assign_codes(right, right_prefix, table);
        }
    }
}

/// Encode `payload` by concatenating each symbol's code.
///
/// # Errors
/// [`CodingError::MissingCode`] if a symbol has no table entry. This cannot
/// happen when `table` was built from the same payload.
pub fn encode(payload: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let mut bits = Vec::new();
    for &symbol in payload {
        let code = table
            .code(symbol)
            .ok_or(CodingError::MissingCode { symbol })?;
        bits.extend_from_slice(code);
    }
    Ok(bits)
}

/// Decode a bit string against `table`.
///
/// Walks the bits growing a match window; whenever the window matches a code
/// in the reverse table, the symbol is emitted and the window resets.
///
/// # Errors
/// [`CodingError::MalformedCode`] if the bits are exhausted while a
/// non-empty, non-matching window remains (truncated or corrupted stream).
pub fn decode(bits: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let mut reverse: HashMap<&[u8], u8> = HashMap::with_capacity(table.len());
    for (symbol, code) in table.iter() {
        reverse.insert(code, symbol);
    }

    let mut payload = Vec::new();
    let mut start = 0usize;
    for end in 1..=bits.len() {
        if let Some(&symbol) = reverse.get(&bits[start..end]) {
            payload.push(symbol);
            start = end;
        }
    }

    if start != bits.len() {
        return Err(CodingError::MalformedCode);
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(payload: &[u8]) -> CodeTable {
        let tree = build_tree(payload).expect("non-empty payload");
        build_table(&tree)
    }

    #[test]
    fn frequency_order_is_first_occurrence() {
        let freqs = count_frequencies(b"banana");
        assert_eq!(freqs, vec![(b'b', 1), (b'a', 3), (b'n', 2)]);
    }

    #[test]
    fn tree_is_deterministic() {
        // All frequencies equal: only the sequence tie-break decides shape.
        let payload = b"abcdabcd";
        let a = table_for(payload);
        let b = table_for(payload);
        assert_eq!(a, b);
    }

    #[test]
    fn every_symbol_gets_a_code() {
        let payload = b"this is an example payload";
        let table = table_for(payload);
        for &symbol in payload.iter() {
            assert!(
                table.code(symbol).is_some(),
                "missing code for 0x{symbol:02X}"
            );
        }
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = table_for(b"the quick brown fox jumps over the lazy dog");
        let codes: Vec<&[u8]> = table.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(
                        !b.starts_with(a),
                        "code {a:?} is a prefix of {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn encode_decode_roundtrip() {
        let payload = b"huffman coding in rust";
        let table = table_for(payload);
        let bits = encode(payload, &table).unwrap();
        let decoded = decode(&bits, &table).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn single_symbol_payload() {
        let payload = b"aaaaaaa";
        let table = table_for(payload);
        assert_eq!(table.code(b'a'), Some(&[0u8][..]));
        let bits = encode(payload, &table).unwrap();
        assert_eq!(bits, vec![0u8; payload.len()]);
        assert_eq!(decode(&bits, &table).unwrap(), payload);
    }

    #[test]
    fn empty_payload_has_no_tree() {
        assert!(build_tree(&[]).is_none());
    }

    #[test]
    fn empty_bits_decode_to_empty_payload() {
        let table = CodeTable::new();
        assert_eq!(decode(&[], &table).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn truncated_stream_is_malformed() {
        // Cut inside the final multi-bit code so a dangling window remains.
        let payload = b"abracadabr";
        let table = table_for(payload);
        let mut bits = encode(payload, &table).unwrap();
        bits.pop();
        assert_eq!(decode(&bits, &table), Err(CodingError::MalformedCode));
    }

    #[test]
    fn missing_symbol_fails_encode() {
        let table = table_for(b"aab");
        assert_eq!(
            encode(b"abc", &table),
            Err(CodingError::MissingCode { symbol: b'c' })
        );
    }

    #[test]
    fn binary_payload_roundtrip() {
        let payload: Vec<u8> = (0u8..=255).collect();
        let table = table_for(&payload);
        let bits = encode(&payload, &table).unwrap();
        assert_eq!(decode(&bits, &table).unwrap(), payload);
    }
}
