use super::{HuffmanNode, HuffmanTree};
use crate::cs::compression::Result;
use crate::cs::error::Error;

/// Decode an encoded bit string using the Huffman tree.
///
/// A cursor walks down from the root, `'0'` to the left child and `'1'` to
/// the right one; each leaf reached emits its symbol and sends the cursor
/// back to the root. A single-symbol tree behaves as if its leaf were the
/// left child of a bare root.
///
/// # Errors
///
/// Returns [`Error::MalformedBitstring`] if the input holds anything other
/// than `'0'` and `'1'`, steps into a child the tree does not have, or stops
/// in the middle of a code. Nothing is returned in those cases.
///
/// # Example
///
/// ```
/// use huffcode::cs::compression::huffman::{decode, huffman_encode};
///
/// let (encoded, tree) = huffman_encode("go go gophers").unwrap();
/// assert_eq!(decode(&encoded, &tree).unwrap(), "go go gophers");
/// assert!(decode(&encoded[..encoded.len() - 1], &tree).is_err());
/// ```
pub fn decode(encoded: &str, tree: &HuffmanTree) -> Result<String> {
    let root = tree.root();
    let mut result = String::with_capacity(encoded.len());
    let mut current = root;
    let mut code_start = 0;

    for (position, bit) in encoded.chars().enumerate() {
        let next = match (current, bit) {
            (HuffmanNode::Internal { left, .. }, '0') => left.as_ref(),
            (HuffmanNode::Internal { right, .. }, '1') => right.as_ref(),
            // Only a single-symbol tree has a leaf at its root.
            (HuffmanNode::Leaf { .. }, '0') => root,
            (HuffmanNode::Leaf { .. }, '1') => {
                return Err(Error::malformed(
                    position,
                    "single-symbol tree has no right branch",
                ));
            }
            (_, other) => {
                return Err(Error::malformed(
                    position,
                    format!("unexpected character {:?}", other),
                ));
            }
        };

        if let HuffmanNode::Leaf { symbol, .. } = next {
            result.push(symbol.as_char());
            current = root;
            code_start = position + 1;
        } else {
            current = next;
        }
    }

    if code_start != encoded.chars().count() {
        return Err(Error::malformed(
            code_start,
            "bitstring ends in the middle of a code",
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::compression::huffman::{
        build_code_table, build_frequency_table, build_huffman_tree, encode,
    };

    fn tree_for(input: &str) -> HuffmanTree {
        build_huffman_tree(&build_frequency_table(input)).unwrap()
    }

    #[test]
    fn test_decode_known_codes() {
        // c = 0, a = 10, b = 11
        let tree = tree_for("abc");
        assert_eq!(decode("10110010", &tree).unwrap(), "abcca");
    }

    #[test]
    fn test_decode_empty_bitstring() {
        assert_eq!(decode("", &tree_for("abc")).unwrap(), "");
        assert_eq!(decode("", &tree_for("zzz")).unwrap(), "");
    }

    #[test]
    fn test_single_symbol_tree() {
        let tree = tree_for("aaaa");
        assert_eq!(decode("0000", &tree).unwrap(), "aaaa");
        let err = decode("0010", &tree).unwrap_err();
        assert!(matches!(err, Error::MalformedBitstring { position: 2, .. }));
    }

    #[test]
    fn test_truncated_bitstring_is_rejected() {
        let input = "huffman coding in rust is fun!";
        let tree = tree_for(input);
        let encoded = encode(input, &build_code_table(&tree)).unwrap();
        let truncated = &encoded[..encoded.len() - 1];
        let err = decode(truncated, &tree).unwrap_err();
        match err {
            Error::MalformedBitstring { position, .. } => {
                assert!(position < truncated.len());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_mid_code_end_reports_code_start() {
        let tree = tree_for("abc");
        // "0" decodes to c, then "1" starts a two-bit code.
        let err = decode("01", &tree).unwrap_err();
        assert!(matches!(err, Error::MalformedBitstring { position: 1, .. }));
    }

    #[test]
    fn test_invalid_character_is_rejected() {
        let tree = tree_for("abc");
        let err = decode("10x1", &tree).unwrap_err();
        assert!(matches!(err, Error::MalformedBitstring { position: 2, .. }));
    }

    #[test]
    fn test_space_is_restored() {
        let tree = tree_for("a b");
        let encoded = encode("a b", &build_code_table(&tree)).unwrap();
        assert_eq!(decode(&encoded, &tree).unwrap(), "a b");
    }
}
