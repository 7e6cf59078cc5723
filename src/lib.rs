//! Huffman coding over the byte alphabet of a text source.
//!
//! A [`HuffmanCoder`] is built once from a source: bytes are counted line by
//! line, the two lightest nodes are merged until one root is left, and every
//! leaf's root path becomes its code. Encoded output is a string of `'0'` and
//! `'1'` characters, not packed bits.
//!
//! ```
//! use huffman_text_coding::HuffmanCoder;
//!
//! let coder = HuffmanCoder::from_source("ab\ncd".as_bytes())?;
//! let bits = coder.encode("ab\ncd".as_bytes())?;
//! assert_eq!(coder.decode_to_string(&bits)?, "ab\ncd");
//! # Ok::<(), huffman_text_coding::CodingError>(())
//! ```

pub mod coder;
pub mod error;
pub mod huffman;
pub mod source;

pub use coder::HuffmanCoder;
pub use error::CodingError;
pub use huffman::{CodeTable, FreqTable, HuffmanTree, Node};
pub use source::{Line, TextSource};
