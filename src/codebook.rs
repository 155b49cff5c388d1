//! Symbol to code mapping derived from a [`HuffmanTree`].

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::error::{Error, Result};
use crate::tree::{HuffNode, HuffmanTree};

/// Bidirectional code table, built once per tree.
///
/// Codes are the root-to-leaf paths of the tree (`0` for the left edge, `1`
/// for the right), so the table is prefix-free by construction. A tree that
/// is a single leaf has no edges; its symbol gets the one-digit code passed
/// to [`CodeBook::from_tree`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeBook {
    codes: BTreeMap<char, String>,
    #[serde(skip)]
    symbols: HashMap<String, char>,
}

impl CodeBook {
    pub fn from_tree(tree: &HuffmanTree, single_symbol_code: char) -> Self {
        let mut book = CodeBook::default();
        match tree.root() {
            None => {}
            Some(HuffNode::Leaf { symbol, .. }) => {
                book.insert(*symbol, single_symbol_code.to_string());
            }
            Some(root) => {
                let mut prefix = String::new();
                book.assign(root, &mut prefix);
            }
        }
        book
    }

    fn assign(&mut self, node: &HuffNode, prefix: &mut String) {
        match node {
            HuffNode::Leaf { symbol, .. } => self.insert(*symbol, prefix.clone()),
            HuffNode::Internal { left, right, .. } => {
                prefix.push('0');
                self.assign(left, prefix);
                prefix.pop();

                prefix.push('1');
                self.assign(right, prefix);
                prefix.pop();
            }
        }
    }

    fn insert(&mut self, symbol: char, code: String) {
        trace!(?symbol, %code, "assigned code");
        self.symbols.insert(code.clone(), symbol);
        self.codes.insert(symbol, code);
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Code for `symbol`, failing with [`Error::UnknownSymbol`] if it was not
    /// in the constructing text.
    pub fn code_for(&self, symbol: char) -> Result<&str> {
        self.get(symbol).ok_or(Error::UnknownSymbol {
            symbol,
            position: 0,
        })
    }

    /// Inverse lookup of a complete code.
    pub fn symbol_for(&self, code: &str) -> Option<char> {
        self.symbols.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn book_of(text: &str) -> CodeBook {
        let tree = HuffmanTree::build(&FrequencyTable::from_text(text));
        CodeBook::from_tree(&tree, '0')
    }

    #[test]
    fn test_codes_follow_tree_paths() {
        // root = (c, (a, b))
        let book = book_of("abcc");
        assert_eq!(book.get('c'), Some("0"));
        assert_eq!(book.get('a'), Some("10"));
        assert_eq!(book.get('b'), Some("11"));
    }

    #[test]
    fn test_inverse_lookup() {
        let book = book_of("abcc");
        for (symbol, code) in book.iter() {
            assert_eq!(book.symbol_for(code), Some(symbol));
        }
        assert_eq!(book.symbol_for("1"), None);
        assert_eq!(book.symbol_for(""), None);
    }

    #[test]
    fn test_single_symbol_gets_one_digit() {
        let book = book_of("zzz");
        assert_eq!(book.get('z'), Some("0"));

        let tree = HuffmanTree::build(&FrequencyTable::from_text("zzz"));
        let book = CodeBook::from_tree(&tree, '1');
        assert_eq!(book.code_for('z'), Ok("1"));
    }

    #[test]
    fn test_empty_tree_has_no_codes() {
        let book = book_of("");
        assert!(book.is_empty());
        assert!(matches!(
            book.code_for('a'),
            Err(Error::UnknownSymbol { symbol: 'a', .. })
        ));
    }

    #[test]
    fn test_known_vector_is_prefix_free() {
        let book = book_of("RA RARARARA SSSRARASA RARAaa");
        assert_eq!(book.len(), 5);
        for (a, code_a) in book.iter() {
            for (b, code_b) in book.iter() {
                if a != b {
                    assert!(!code_b.starts_with(code_a), "{a:?}={code_a} prefixes {b:?}={code_b}");
                }
            }
        }
    }
}
