//! Error type shared by the codec stages.

use crate::cs::compression::huffman::Symbol;

/// Failures raised by the Huffman pipeline.
///
/// Every variant aborts the run it occurs in; no stage returns partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input cannot be processed at all, e.g. an empty frequency table
    /// handed to the tree builder.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The code table has no entry for a symbol of the text being encoded.
    #[error("no code for symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: Symbol, position: usize },

    /// The bitstring does not split into whole codes of the given tree.
    #[error("malformed bitstring at bit {position}: {reason}")]
    MalformedBitstring { position: usize, reason: String },
}

impl Error {
    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        Error::MalformedBitstring {
            position,
            reason: reason.into(),
        }
    }
}
