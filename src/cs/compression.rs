//! Compression algorithms implementation.
//!
//! This module provides a Huffman prefix-code codec over text. Encoded output
//! is a string of `'0'` and `'1'` characters rather than packed bytes.
//!
//! # Examples
//!
//! ```rust
//! use huffcode::cs::compression::{huffman_decode, huffman_encode};
//!
//! let (encoded, tree) = huffman_encode("abracadabra").unwrap();
//! assert_eq!(huffman_decode(&encoded, &tree).unwrap(), "abracadabra");
//! ```

use crate::cs::error::Error;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

pub mod huffman;
pub use huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, decode, encode, encode_batch,
    huffman_decode, huffman_encode, CodeMap, CompressionReport, FrequencyMap, HuffmanCodec,
    HuffmanNode, HuffmanTree, Symbol,
};
