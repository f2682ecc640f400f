use std::collections::BTreeMap;

use super::{FrequencyMap, HuffmanNode, HuffmanTree, Symbol};

/// Code of every symbol in a tree, as a string of `'0'` (left) and `'1'`
/// (right) steps from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMap {
    codes: BTreeMap<Symbol, String>,
}

impl CodeMap {
    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        // After sorting, a code that prefixes another sorts directly before
        // some code it prefixes, so checking neighbours is enough.
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        codes
            .windows(2)
            .all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Number of bits needed to encode an input with the given frequencies.
    /// Symbols without a code are ignored. Saturates at `usize::MAX`.
    pub fn weighted_length(&self, freq: &FrequencyMap) -> usize {
        freq.iter()
            .filter_map(|(symbol, count)| {
                self.get(symbol)
                    .map(|code| code.len().saturating_mul(count))
            })
            .fold(0usize, usize::saturating_add)
    }
}

/// Recursively build the code table mapping symbols to their Huffman codes.
///
/// If the tree consists of a single leaf (i.e. one unique symbol), the code "0" is assigned.
pub fn build_code_table(tree: &HuffmanTree) -> CodeMap {
    let mut table = BTreeMap::new();
    match tree.root() {
        HuffmanNode::Leaf { symbol, .. } => {
            table.insert(*symbol, "0".to_string());
        }
        root => build_code_table_helper(root, &mut String::new(), &mut table),
    }
    CodeMap { codes: table }
}

fn build_code_table_helper(
    node: &HuffmanNode,
    prefix: &mut String,
    table: &mut BTreeMap<Symbol, String>,
) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            table.insert(*symbol, prefix.clone());
        }
        HuffmanNode::Internal { left, right, .. } => {
            prefix.push('0');
            build_code_table_helper(left, prefix, table);
            prefix.pop();
            prefix.push('1');
            build_code_table_helper(right, prefix, table);
            prefix.pop();
        }
    }
}
