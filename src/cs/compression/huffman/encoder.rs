use super::{CodeMap, Symbol};
use crate::cs::compression::Result;
use crate::cs::error::Error;

/// Encode the input string using the provided code table.
/// Each character is replaced with its Huffman code.
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] if a character has no code, which means
/// the table was built from a different input.
pub fn encode(input: &str, code_table: &CodeMap) -> Result<String> {
    // Exact output size; a missing symbol fails below before it matters.
    let bits: usize = input
        .chars()
        .filter_map(|ch| code_table.get(Symbol::from(ch)).map(str::len))
        .sum();
    let mut encoded = String::with_capacity(bits);
    for (position, ch) in input.chars().enumerate() {
        let symbol = Symbol::from(ch);
        let code = code_table
            .get(symbol)
            .ok_or(Error::UnknownSymbol { symbol, position })?;
        encoded.push_str(code);
    }
    Ok(encoded)
}
