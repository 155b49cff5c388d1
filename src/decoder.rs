//! Bit-by-bit tree walk from a digit stream back to text.

use tracing::warn;

use crate::config::TruncationPolicy;
use crate::error::{Error, Result};
use crate::tree::{HuffNode, HuffmanTree};

/// Walks a [`HuffmanTree`] from the root, one digit per edge.
///
/// `0` goes left and `1` goes right. Reaching a leaf emits its symbol and
/// resets the walk to the root, so no lookahead is needed.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    tree: &'a HuffmanTree,
    single_symbol_code: char,
    truncation: TruncationPolicy,
}

impl<'a> Decoder<'a> {
    pub fn new(tree: &'a HuffmanTree, single_symbol_code: char, truncation: TruncationPolicy) -> Self {
        Decoder {
            tree,
            single_symbol_code,
            truncation,
        }
    }

    pub fn decode(&self, stream: &str) -> Result<String> {
        let root = match self.tree.root() {
            Some(root) => root,
            None if stream.is_empty() => return Ok(String::new()),
            None => return Err(Error::decode("tree is empty", 0)),
        };
        if let HuffNode::Leaf { symbol, .. } = root {
            return self.decode_single(*symbol, stream);
        }

        let mut decoded = String::new();
        let mut node = root;
        let mut pending = 0;
        for (position, digit) in stream.chars().enumerate() {
            let bit = parse_digit(digit, position)?;
            node = node
                .child(bit)
                .ok_or_else(|| Error::decode("walked past a leaf", position))?;
            pending += 1;
            if let Some(symbol) = node.symbol() {
                decoded.push(symbol);
                node = root;
                pending = 0;
            }
        }

        if pending > 0 {
            let consumed = decoded.chars().count();
            match self.truncation {
                TruncationPolicy::Reject => {
                    return Err(Error::TruncatedStream { consumed, pending });
                }
                TruncationPolicy::Discard => {
                    warn!(consumed, pending, "discarding trailing partial path");
                }
            }
        }
        Ok(decoded)
    }

    // A lone leaf has no edges; each digit must be the assigned code.
    fn decode_single(&self, symbol: char, stream: &str) -> Result<String> {
        let mut decoded = String::with_capacity(stream.len() * symbol.len_utf8());
        for (position, digit) in stream.chars().enumerate() {
            parse_digit(digit, position)?;
            if digit != self.single_symbol_code {
                return Err(Error::decode(
                    format!("no path for {digit:?} in a single-symbol tree"),
                    position,
                ));
            }
            decoded.push(symbol);
        }
        Ok(decoded)
    }
}

fn parse_digit(digit: char, position: usize) -> Result<bool> {
    match digit {
        '0' => Ok(false),
        '1' => Ok(true),
        other => Err(Error::decode(format!("invalid digit {other:?}"), position)),
    }
}
