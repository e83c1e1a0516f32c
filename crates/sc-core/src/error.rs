use std::fmt;

use crate::constants::{MAX_CANVAS, MIN_CANVAS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// No catalog record matches the given name or abbreviation.
    NotFound(String),
    /// Canvas width or height outside the supported range.
    InvalidDimensions { width: u32, height: u32 },
    /// A record with no stars reached the engine (catalog invariant breach).
    EmptyGeometry(String),
    /// A search filter names an unrecognized shape class or brightness tier.
    InvalidFilter(String),
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::NotFound(name) => write!(f, "constellation not found: '{name}'"),
            ComposeError::InvalidDimensions { width, height } => write!(
                f,
                "canvas dimensions {width}x{height} outside supported range \
                 [{MIN_CANVAS}, {MAX_CANVAS}]"
            ),
            ComposeError::EmptyGeometry(name) => {
                write!(f, "constellation '{name}' has no star geometry")
            }
            ComposeError::InvalidFilter(msg) => write!(f, "invalid filter: {msg}"),
        }
    }
}

impl std::error::Error for ComposeError {}

pub type Result<T> = std::result::Result<T, ComposeError>;
