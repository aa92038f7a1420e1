//! Error types for value conversion.
//!
//! A dump itself cannot fail: every degradation is recovered locally and
//! reported as a [`Diagnostic`](crate::Diagnostic). Errors only arise on the
//! serde bridge, when converting a `T: Serialize` into a [`Value`](crate::Value)
//! graph encounters a shape the model cannot hold.
//!
//! ## Examples
//!
//! ```rust
//! use litdump::{to_value, Error};
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! map.insert(1u32, "one");
//! // Numeric keys are fine; they become keyed-sequence keys.
//! assert!(to_value(&map).is_ok());
//! ```

use std::fmt;
use thiserror::Error;

/// All errors the serde bridge can produce.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A serde shape the value model cannot represent.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised by a `Serialize` implementation.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported-type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
