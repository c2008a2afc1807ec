//! Error types for configuration and startup
//!
//! Frame updates never fail; everything that can go wrong is caught while the
//! canvas and the entity list are being built.

use std::fmt;

/// A config that failed to parse or describes an impossible game
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// JSON could not be parsed
    Parse(String),
    /// Parsed fine but a value is out of range
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "config parse error: {msg}"),
            ConfigError::Invalid(what) => write!(f, "invalid config: {what}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Startup failures - the game never starts drawing if any of these occur
#[derive(Debug, Clone, PartialEq)]
pub enum InitError {
    NoWindow,
    NoDocument,
    /// No `<canvas>` element in the page
    NoCanvas,
    /// The selected element is not a canvas
    NotACanvas,
    /// The canvas refused a 2D context
    NoContext,
    /// Drawing onto a canvas with no area would silently do nothing
    ZeroSizedCanvas { width: u32, height: u32 },
    Config(ConfigError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::NoWindow => write!(f, "no global window"),
            InitError::NoDocument => write!(f, "window has no document"),
            InitError::NoCanvas => write!(f, "no canvas element found"),
            InitError::NotACanvas => write!(f, "element is not a canvas"),
            InitError::NoContext => write!(f, "canvas has no 2d context"),
            InitError::ZeroSizedCanvas { width, height } => {
                write!(f, "canvas is {width}x{height}, nothing can be drawn")
            }
            InitError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for InitError {
    fn from(err: ConfigError) -> Self {
        InitError::Config(err)
    }
}
