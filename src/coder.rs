//! Encode/decode front end built once from a single text source.
//!
//! Construction runs the whole pipeline (frequency table, tree, code table);
//! afterwards everything is read-only, so a `HuffmanCoder` can be shared
//! across threads by reference.

use log::{debug, warn};

use crate::error::{CodingError, Result};
use crate::huffman::{
    CodeTable, FreqTable, HuffmanTree, Node, build_code_table, build_frequency_table,
    build_huffman_tree,
};
use crate::source::{Line, TextSource};

#[derive(Debug)]
pub struct HuffmanCoder {
    frequencies: FreqTable,
    tree: Option<Box<HuffmanTree>>,
    codes: CodeTable,
}

impl HuffmanCoder {
    /// Reads `source` line by line and builds the code from its byte counts.
    pub fn from_source(source: impl TextSource) -> Result<Self> {
        let lines = source.read_lines()?;
        Ok(Self::from_frequencies(build_frequency_table(&lines)))
    }

    pub fn from_frequencies(mut frequencies: FreqTable) -> Self {
        frequencies.retain(|_, count| *count > 0);

        let tree = build_huffman_tree(&frequencies);
        let codes = tree
            .as_deref()
            .map(build_code_table)
            .unwrap_or_default();

        debug!(
            "Coder ready: {} symbols, {} codes",
            frequencies.len(),
            codes.len()
        );
        Self {
            frequencies,
            tree,
            codes,
        }
    }

    pub fn frequencies(&self) -> &FreqTable {
        &self.frequencies
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.codes
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_deref()
    }

    pub fn alphabet_len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn code(&self, symbol: u8) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Code for `symbol`, or `""` when the symbol is not in the alphabet.
    pub fn get_character_code(&self, symbol: u8) -> &str {
        self.code(symbol).unwrap_or("")
    }

    /// Encodes `source` as a string of `'0'`/`'1'` characters. A line break
    /// is emitted only after lines that were actually terminated.
    pub fn encode(&self, source: impl TextSource) -> Result<String> {
        let lines = source.read_lines()?;
        self.encode_lines(&lines)
    }

    pub fn encode_lines(&self, lines: &[Line]) -> Result<String> {
        let mut encoded = String::new();
        for line in lines {
            for &byte in &line.bytes {
                encoded.push_str(self.lookup(byte)?);
            }
            if line.terminated {
                encoded.push_str(self.lookup(b'\n')?);
            }
        }
        Ok(encoded)
    }

    fn lookup(&self, byte: u8) -> Result<&str> {
        self.code(byte).ok_or_else(|| {
            warn!("Cannot encode byte {:#04x}: not in alphabet", byte);
            CodingError::Unencodable(byte)
        })
    }

    /// Inverts [`encode`](Self::encode). An empty bit string decodes to no
    /// symbols whatever the alphabet.
    pub fn decode(&self, bits: &str) -> Result<Vec<u8>> {
        if bits.is_empty() {
            return Ok(Vec::new());
        }

        let decoded = match self.tree.as_deref() {
            None => Err(CodingError::EmptyAlphabet),
            Some(Node::Leaf { byte, .. }) => decode_single(*byte, bits),
            Some(root) => walk_tree(root, bits),
        };
        decoded.inspect_err(|e| warn!("Decoding failed: {}", e))
    }

    pub fn decode_to_string(&self, bits: &str) -> Result<String> {
        Ok(String::from_utf8(self.decode(bits)?)?)
    }
}

/// One-symbol alphabet: every `'0'` is one occurrence of `byte`.
fn decode_single(byte: u8, bits: &str) -> Result<Vec<u8>> {
    bits.chars()
        .enumerate()
        .map(|(position, bit)| match bit {
            '0' => Ok(byte),
            _ => Err(CodingError::InvalidBit { bit, position }),
        })
        .collect()
}

/// Walks from `root` for each symbol; `root` must be an internal node.
fn walk_tree(root: &Node, bits: &str) -> Result<Vec<u8>> {
    let mut decoded = Vec::new();
    let mut node = root;
    let mut mid_code = false;
    let mut consumed = 0;

    for (position, bit) in bits.chars().enumerate() {
        let next = match (node, bit) {
            (Node::Internal { left, .. }, '0') => left,
            (Node::Internal { right, .. }, '1') => right,
            _ => return Err(CodingError::InvalidBit { bit, position }),
        };
        consumed = position + 1;

        match next.as_ref() {
            Node::Leaf { byte, .. } => {
                decoded.push(*byte);
                node = root;
                mid_code = false;
            }
            internal => {
                node = internal;
                mid_code = true;
            }
        }
    }

    if mid_code {
        return Err(CodingError::Truncated { position: consumed });
    }
    Ok(decoded)
}
