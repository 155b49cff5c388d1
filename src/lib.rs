//! # huffman_coder
//!
//! Minimum-redundancy prefix codes over the characters of a text.
//!
//! An [`Engine`] is built from one text: it counts the symbols, merges them
//! into a Huffman tree, and derives a code book from the tree's paths. The
//! same engine then encodes text to a string of `0`/`1` digits and decodes
//! such strings back.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffman_coder::{Engine, EngineConfig, Error};
//!
//! let engine = Engine::new("abracadabra");
//! let bits = engine.encode("cab")?;
//! assert_eq!(engine.decode(&bits)?, "cab");
//!
//! // 'z' was never seen
//! assert!(matches!(engine.encode("z"), Err(Error::UnknownSymbol { .. })));
//!
//! // a trailing partial path is an error unless the engine is lenient
//! let lenient = Engine::with_config("abracadabra", EngineConfig::lenient())?;
//! let mut cut = lenient.encode("cab")?;
//! cut.pop();
//! assert!(engine.decode(&cut).is_err());
//! assert_eq!(lenient.decode(&cut)?, "ca");
//! # Ok::<(), Error>(())
//! ```

pub mod codebook;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod search;
pub mod tree;

pub use codebook::CodeBook;
pub use config::{EngineConfig, TruncationPolicy};
pub use engine::{Engine, EngineReport, SymbolReport};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use tree::{HuffNode, HuffmanTree};
