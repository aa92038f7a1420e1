//! Structured diagnostics for lossy dumps.
//!
//! Nothing in the dumper is fatal: the worst outcome is a syntactically valid
//! but semantically lossy output. Every degradation that used to be a console
//! side-channel is instead reported here, returned alongside the text so
//! callers and tests can assert on it. Degradations are also logged through
//! the [`log`] facade as warnings.

use thiserror::Error;

/// One recoverable degradation encountered during a dump.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Reading a property raised; its value was replaced with a placeholder
    /// string literal embedding the message.
    #[error("property `{property}` could not be read: {message}")]
    PropertyRead { property: String, message: String },

    /// An object identity was seen again within the same call; the repeat
    /// occurrence was collapsed to an empty construction.
    #[error("repeated reference to `{type_name}` collapsed to an empty construction")]
    CycleCollapsed { type_name: String },

    /// An enum value had no corresponding named member; the raw discriminant
    /// was emitted instead.
    #[error("enum `{type_name}` has no member for value {raw}; emitted the raw number")]
    UnmappedEnum { type_name: String, raw: i64 },

    /// A value had no literal form and no usable display text; it degraded
    /// to null.
    #[error("`{type_name}` has no literal form; degraded to null")]
    Unrepresentable { type_name: String },

    /// An empty sequence whose element type could not be resolved; the
    /// construction was emitted untyped.
    #[error("empty sequence with unresolved element type; emitted untyped")]
    UntypedSequence,
}

/// The result of one dump call: the rendered declaration plus every
/// degradation that occurred while producing it.
///
/// # Examples
///
/// ```rust
/// use litdump::{dump_value, Value};
///
/// let out = dump_value(&Value::Null);
/// assert_eq!(out.text, "let x = None;");
/// assert!(!out.is_lossy());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Dump {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Dump {
    /// Returns `true` if any degradation occurred.
    #[must_use]
    pub fn is_lossy(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

impl std::fmt::Display for Dump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
