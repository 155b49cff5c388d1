//! Engine configuration.

use serde::Deserialize;

use crate::error::{Error, Result};

/// What the decoder does when the digit stream stops between leaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncationPolicy {
    /// Fail with [`Error::TruncatedStream`].
    #[default]
    Reject,
    /// Drop the trailing partial path and return what was decoded.
    Discard,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Handling of a stream that ends mid-path
    #[serde(default)]
    pub truncation: TruncationPolicy,

    /// Digit given to the only symbol of a one-symbol alphabet
    #[serde(default = "default_single_symbol_code")]
    pub single_symbol_code: char,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            truncation: TruncationPolicy::default(),
            single_symbol_code: default_single_symbol_code(),
        }
    }
}

impl EngineConfig {
    /// Lenient configuration: trailing partial paths are discarded.
    pub fn lenient() -> Self {
        Self {
            truncation: TruncationPolicy::Discard,
            ..Self::default()
        }
    }

    /// Check that the configuration can drive an engine.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.single_symbol_code, '0' | '1') {
            return Err(Error::invalid_input(format!(
                "single_symbol_code must be '0' or '1', got {:?}",
                self.single_symbol_code
            )));
        }
        Ok(())
    }
}

fn default_single_symbol_code() -> char {
    '0'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.truncation, TruncationPolicy::Reject);
        assert_eq!(config.single_symbol_code, '0');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EngineConfig = serde_json::from_str(r#"{"truncation":"discard"}"#).unwrap();
        assert_eq!(config, EngineConfig::lenient());
    }

    #[test]
    fn test_validate_rejects_non_digit() {
        let config = EngineConfig {
            single_symbol_code: 'x',
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidInput { .. })
        ));
    }
}
