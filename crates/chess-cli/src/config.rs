//! Configuration file loading for the board printer.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings read from `chess.toml`.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChessConfig {
    /// Position to print when no `--fen` is given.
    /// Defaults to the standard starting position.
    #[serde(default)]
    pub start_fen: Option<String>,
    /// List the legal moves of the side to move.
    #[serde(default)]
    pub show_legal_moves: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ChessConfig {
    fn default() -> Self {
        ChessConfig {
            start_fen: None,
            show_legal_moves: false,
            log_filter: default_log_filter(),
        }
    }
}

impl ChessConfig {
    /// Default configuration file name, looked up in the working directory.
    pub const DEFAULT_PATH: &'static str = "chess.toml";

    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
start_fen = "4k3/8/8/8/8/8/8/4K3 w - - 0 1"
show_legal_moves = true
log_filter = "chess_engine=debug"
"#;
        let config: ChessConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.start_fen.as_deref(),
            Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1")
        );
        assert!(config.show_legal_moves);
        assert_eq!(config.log_filter, "chess_engine=debug");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ChessConfig = toml::from_str("").unwrap();
        assert_eq!(config, ChessConfig::default());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ChessConfig::load(Path::new("does/not/exist/chess.toml")).unwrap();
        assert_eq!(config, ChessConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!("chess-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "show_legal_moves = maybe").unwrap();
        let result = ChessConfig::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
