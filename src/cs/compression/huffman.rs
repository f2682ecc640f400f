//! Huffman coding over text.
//!
//! The codec builds a prefix code from the character frequencies of an input,
//! writes the input as a string of `'0'`/`'1'` characters and reads it back by
//! walking the tree. Each input gets its own table, tree and code map; none of
//! them are meant to be reused for a different input.
//!
//! Stages, in pipeline order:
//! - [`build_frequency_table`]: symbol counts
//! - [`build_huffman_tree`]: greedy minimum-frequency merge
//! - [`build_code_table`]: root-to-leaf paths
//! - [`encode`] / [`decode`]: text to bits and back
//!
//! [`HuffmanCodec::compress`] runs all of them and verifies the round trip.
//!
//! # Example
//!
//! ```
//! use huffcode::cs::compression::huffman::HuffmanCodec;
//!
//! let report = HuffmanCodec::compress("a b a").unwrap();
//! assert!(report.round_trip_ok);
//! assert_eq!(report.decoded, "a b a");
//! assert_eq!(report.original_bits(), 40);
//! assert!(report.compressed_bits() < report.original_bits());
//! ```

use rayon::prelude::*;

use crate::cs::compression::Result;
use crate::cs::error::Error;

mod codes;
mod decoder;
mod encoder;
mod frequency;
mod symbol;
mod tree;


pub use codes::{build_code_table, CodeMap};
pub use decoder::decode;
pub use encoder::encode;
pub use frequency::{build_frequency_table, FrequencyMap};
pub use symbol::Symbol;
pub use tree::{build_huffman_tree, HuffmanNode, HuffmanTree};

/// Bits per character assumed for the uncompressed size.
pub const BITS_PER_CHAR: usize = 8;

/// Everything one pass of the codec produces for an input.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    pub input: String,
    pub frequencies: FrequencyMap,
    /// `None` only for empty input.
    pub tree: Option<HuffmanTree>,
    pub codes: CodeMap,
    pub encoded: String,
    pub decoded: String,
    /// Whether `decoded` equals `input`. A `false` here points at a codec bug.
    pub round_trip_ok: bool,
}

impl CompressionReport {
    /// Size of the input at [`BITS_PER_CHAR`] bits per character.
    pub fn original_bits(&self) -> usize {
        self.input.chars().count() * BITS_PER_CHAR
    }

    /// Size of the encoded bitstring; each character is one bit.
    pub fn compressed_bits(&self) -> usize {
        self.encoded.len()
    }

    /// Original over compressed size, or `None` when nothing was encoded.
    pub fn compression_ratio(&self) -> Option<f64> {
        match self.compressed_bits() {
            0 => None,
            compressed => Some(self.original_bits() as f64 / compressed as f64),
        }
    }
}

/// Runs the full pipeline on one input.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Analyze, build, encode, decode and verify `input`.
    ///
    /// Empty input is valid: it yields empty tables, no tree and an empty
    /// bitstring.
    pub fn compress(input: &str) -> Result<CompressionReport> {
        let frequencies = build_frequency_table(input);
        log::trace!("Symbol frequency: {:?}", frequencies);

        if frequencies.is_empty() {
            return Ok(CompressionReport {
                input: String::new(),
                frequencies,
                tree: None,
                codes: CodeMap::default(),
                encoded: String::new(),
                decoded: String::new(),
                round_trip_ok: true,
            });
        }

        let tree = build_huffman_tree(&frequencies)?;
        let codes = build_code_table(&tree);
        let encoded = encode(input, &codes)?;
        let decoded = decode(&encoded, &tree)?;
        let round_trip_ok = decoded == input;

        log::debug!(
            "encoded {} symbols ({} distinct) into {} bits",
            frequencies.total(),
            frequencies.len(),
            encoded.len()
        );
        if !round_trip_ok {
            log::warn!("round trip mismatch: {:?} decoded as {:?}", input, decoded);
        }

        Ok(CompressionReport {
            input: input.to_string(),
            frequencies,
            tree: Some(tree),
            codes,
            encoded,
            decoded,
            round_trip_ok,
        })
    }
}

/// Run [`HuffmanCodec::compress`] over many inputs in parallel.
///
/// Each input is an independent unit of work; results keep the input order.
pub fn encode_batch(inputs: &[&str]) -> Vec<Result<CompressionReport>> {
    inputs
        .par_iter()
        .map(|input| HuffmanCodec::compress(input))
        .collect()
}

/// Convenience function: builds the Huffman tree from input, encodes the input,
/// and returns (encoded bit string, Huffman tree).
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for empty input, which has no tree.
pub fn huffman_encode(input: &str) -> Result<(String, HuffmanTree)> {
    let freq_table = build_frequency_table(input);
    if freq_table.is_empty() {
        return Err(Error::InvalidInput("input must be non-empty".to_string()));
    }
    let tree = build_huffman_tree(&freq_table)?;
    let code_table = build_code_table(&tree);
    let encoded = encode(input, &code_table)?;
    Ok((encoded, tree))
}

/// Convenience function: decodes an encoded bit string using the provided Huffman tree.
pub fn huffman_decode(encoded: &str, tree: &HuffmanTree) -> Result<String> {
    decode(encoded, tree)
}
