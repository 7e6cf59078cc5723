use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use log::{debug, trace};

use crate::source::Line;

pub type CodeTable = BTreeMap<u8, String>;
pub type FreqTable = BTreeMap<u8, u64>;

#[derive(Debug, Eq, PartialEq)]
pub enum Node {
    Leaf {
        byte: u8,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

pub type HuffmanTree = Node;

/// Heap entry ordered by `(freq, seq)`, smallest first.
#[derive(Debug, Eq, PartialEq)]
struct HeapNode {
    freq: u64,
    seq: usize,
    node: Box<Node>,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: compare reversed so the lightest, then
        // earliest-inserted, entry pops first.
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counts every byte of every line. Line breaks are consumed by the line
/// reader, so the `\n` count is put back afterwards from the terminated lines.
pub fn build_frequency_table(lines: &[Line]) -> FreqTable {
    let mut freq = FreqTable::new();
    let mut line_breaks = 0u64;

    for line in lines {
        for &byte in &line.bytes {
            *freq.entry(byte).or_insert(0) += 1;
        }
        if line.terminated {
            line_breaks += 1;
        }
    }

    if line_breaks > 0 {
        freq.insert(b'\n', line_breaks);
    }

    debug!(
        "Frequency table: {} unique symbols over {} lines ({} line breaks)",
        freq.len(),
        lines.len(),
        line_breaks
    );
    freq
}

pub fn entropy_from_freq(freq: &FreqTable) -> f64 {
    let total_f: f64 = freq.values().map(|&count| count as f64).sum();
    if total_f == 0.0 {
        return 0.0;
    }

    let entropy: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum();

    debug!(
        "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
        entropy, total_f
    );
    entropy
}

/// Frequency-weighted mean code length in bits/symbol.
pub fn average_code_length(freq: &FreqTable, table: &CodeTable) -> f64 {
    let total: f64 = freq.values().map(|&count| count as f64).sum();
    if total == 0.0 {
        return 0.0;
    }

    let weighted: f64 = freq
        .iter()
        .filter_map(|(byte, &count)| table.get(byte).map(|code| code.len() as f64 * count as f64))
        .sum();
    weighted / total
}

/// Greedy bottom-up construction. Returns `None` for an empty table and a lone
/// leaf for a single-symbol table.
pub fn build_huffman_tree(frequencies: &FreqTable) -> Option<Box<HuffmanTree>> {
    debug!(
        "Building Huffman Tree from {} unique symbols",
        frequencies.len()
    );

    let mut heap: BinaryHeap<HeapNode> = frequencies
        .iter()
        .enumerate()
        .map(|(seq, (&byte, &freq))| HeapNode {
            freq,
            seq,
            node: Box::new(Node::Leaf { byte, freq }),
        })
        .collect();
    let mut next_seq = heap.len();

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };
        // counts from from_frequencies can be arbitrarily large
        let freq = left.freq.saturating_add(right.freq);
        trace!(
            "Merging seq {} (freq {}) and seq {} (freq {}) into seq {}",
            left.seq, left.freq, right.seq, right.freq, next_seq
        );
        heap.push(HeapNode {
            freq,
            seq: next_seq,
            node: Box::new(Node::Internal {
                freq,
                left: left.node,
                right: right.node,
            }),
        });
        next_seq += 1;
    }

    debug!("Tree construction complete.");
    heap.pop().map(|n| n.node)
}

/// Derives the code of every leaf: `0` for a left edge, `1` for a right edge.
/// A tree that is a single leaf has no edges, so its symbol gets `"0"`.
pub fn build_code_table(root: &Node) -> CodeTable {
    let mut table = CodeTable::new();
    match root {
        Node::Leaf { byte, .. } => {
            trace!("Single-symbol alphabet, byte {:#04x} gets '0'", byte);
            table.insert(*byte, String::from("0"));
        }
        Node::Internal { .. } => assign_codes(root, String::new(), &mut table),
    }
    debug!("Code table built with {} entries.", table.len());
    table
}

fn assign_codes(node: &Node, prefix: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { byte, .. } => {
            trace!(
                "Assigning code to byte {:#04x} ('{}') : '{}'",
                byte,
                (*byte).escape_ascii(),
                prefix
            );
            table.insert(*byte, prefix);
        }
        Node::Internal { left, right, .. } => {
            assign_codes(left, format!("{}0", prefix), table);
            assign_codes(right, format!("{}1", prefix), table);
        }
    }
}
