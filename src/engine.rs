//! The Huffman engine: one instance per constructing text, reused for both
//! directions.
//!
//! ```rust
//! use huffman_coder::Engine;
//!
//! let text = "RA RARARARA SSSRARASA RARAaa";
//! let engine = Engine::new(text);
//! let encoded = engine.encode(text)?;
//! assert_eq!(engine.decode(&encoded)?, text);
//! # Ok::<(), huffman_coder::Error>(())
//! ```

use serde::Serialize;
use std::fmt::Write;

use tracing::debug;

use crate::codebook::CodeBook;
use crate::config::EngineConfig;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;

/// Frequency table, tree and code book for one text.
///
/// Everything is built in the constructor and never mutated afterwards, so a
/// shared `&Engine` can encode and decode from several threads at once.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    code_book: CodeBook,
}

impl Engine {
    /// Build an engine with the default configuration.
    pub fn new(text: &str) -> Self {
        Self::build(text, EngineConfig::default())
    }

    pub fn with_config(text: &str, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(text, config))
    }

    /// Build from raw bytes, which must be UTF-8.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(std::str::from_utf8(bytes)?))
    }

    /// Build from a text that may be absent.
    pub fn from_optional(text: Option<&str>) -> Result<Self> {
        text.map(Self::new)
            .ok_or_else(|| Error::invalid_input("no text to build the engine from"))
    }

    fn build(text: &str, config: EngineConfig) -> Self {
        let frequencies = FrequencyTable::from_text(text);
        let tree = HuffmanTree::build(&frequencies);
        let code_book = CodeBook::from_tree(&tree, config.single_symbol_code);
        debug!(
            symbols = frequencies.len(),
            length = frequencies.total(),
            truncation = ?config.truncation,
            "engine ready"
        );
        Engine {
            config,
            frequencies,
            tree,
            code_book,
        }
    }

    pub fn encoder(&self) -> Encoder<'_> {
        Encoder::new(&self.code_book)
    }

    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(
            &self.tree,
            self.config.single_symbol_code,
            self.config.truncation,
        )
    }

    pub fn encode(&self, text: &str) -> Result<String> {
        self.encoder().encode(text)
    }

    pub fn encoded_len(&self, text: &str) -> Result<usize> {
        self.encoder().encoded_len(text)
    }

    pub fn decode(&self, stream: &str) -> Result<String> {
        self.decoder().decode(stream)
    }

    pub fn code_for(&self, symbol: char) -> Result<&str> {
        self.code_book.code_for(symbol)
    }

    pub fn symbol_for(&self, code: &str) -> Option<char> {
        self.code_book.symbol_for(code)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn code_book(&self) -> &CodeBook {
        &self.code_book
    }

    pub fn alphabet_len(&self) -> usize {
        self.frequencies.len()
    }

    /// Human-readable listing of every symbol's count and code, followed by
    /// the tree shape.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} symbol(s), {} char(s) of input",
            self.alphabet_len(),
            self.frequencies.total()
        );
        for (symbol, count) in self.frequencies.iter() {
            let code = self.code_book.get(symbol).unwrap_or("");
            let _ = writeln!(out, "{{ {symbol:?} x{count} encoded : {code} }}");
        }
        out.push_str(&self.tree.to_string());
        out
    }

    /// Serializable snapshot of the code assignment.
    pub fn report(&self) -> EngineReport {
        let symbols: Vec<SymbolReport> = self
            .frequencies
            .iter()
            .map(|(symbol, count)| SymbolReport {
                symbol,
                count,
                code: self.code_book.get(symbol).unwrap_or_default().to_string(),
            })
            .collect();
        let total_bits = symbols.iter().map(|s| s.count * s.code.len()).sum();
        let input_length = self.frequencies.total();
        let average_code_length = if input_length == 0 {
            0.0
        } else {
            total_bits as f64 / input_length as f64
        };
        EngineReport {
            input_length,
            total_bits,
            average_code_length,
            symbols,
        }
    }
}

/// One row of an [`EngineReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolReport {
    pub symbol: char,
    pub count: usize,
    pub code: String,
}

/// Summary of an engine's code assignment for its constructing text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineReport {
    pub input_length: usize,
    /// Digits needed to encode the constructing text.
    pub total_bits: usize,
    pub average_code_length: f64,
    pub symbols: Vec<SymbolReport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TruncationPolicy;

    #[test]
    fn test_roundtrip_known_vector() {
        let text = "RA RARARARA SSSRARASA RARAaa";
        let engine = Engine::new(text);
        let encoded = engine.encode(text).unwrap();
        assert!(encoded.chars().all(|c| c == '0' || c == '1'));
        assert_eq!(encoded.len(), engine.encoded_len(text).unwrap());
        assert_eq!(engine.decode(&encoded).unwrap(), text);
    }

    #[test]
    fn test_from_optional() {
        assert!(matches!(
            Engine::from_optional(None),
            Err(Error::InvalidInput { .. })
        ));
        assert_eq!(Engine::from_optional(Some("ab")).unwrap().alphabet_len(), 2);
    }

    #[test]
    fn test_from_utf8() {
        assert!(matches!(
            Engine::from_utf8(&[0xfe, 0xff]),
            Err(Error::InvalidInput { .. })
        ));
        assert_eq!(Engine::from_utf8(b"abc").unwrap().alphabet_len(), 3);
    }

    #[test]
    fn test_with_config_validates() {
        let config = EngineConfig {
            single_symbol_code: '2',
            truncation: TruncationPolicy::Reject,
        };
        assert!(Engine::with_config("aa", config).is_err());
    }

    #[test]
    fn test_describe_is_never_empty() {
        let described = Engine::new("").describe();
        assert!(described.starts_with("0 symbol(s), 0 char(s) of input"));

        let described = Engine::new("abcc").describe();
        assert!(described.contains("{ 'c' x2 encoded : 0 }"));
        assert!(described.contains("{ 'a' x1 encoded : 10 }"));
        assert!(described.contains("root -> internal [weight 4]"));
    }

    #[test]
    fn test_report_totals() {
        // c=0, a=10, b=11
        let report = Engine::new("abcc").report();
        assert_eq!(report.input_length, 4);
        assert_eq!(report.total_bits, 6);
        assert!((report.average_code_length - 1.5).abs() < f64::EPSILON);
        assert_eq!(report.symbols.len(), 3);
        assert_eq!(report.symbols[0].code, "10");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["symbols"][2]["symbol"], "c");
        assert_eq!(json["total_bits"], 6);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
