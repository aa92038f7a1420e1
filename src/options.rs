//! Configuration options for dump output.
//!
//! Options only affect rendering: traversal and classification are identical
//! regardless of configuration. The default is a compact single-line
//! declaration; pretty mode breaks constructions across indented lines.
//!
//! ## Examples
//!
//! ```rust
//! use litdump::{dump_with_options, DumpOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let compact = dump_with_options(&Point { x: 1, y: 2 }, DumpOptions::new()).unwrap();
//! let pretty = dump_with_options(&Point { x: 1, y: 2 }, DumpOptions::pretty()).unwrap();
//! assert!(!compact.text.contains('\n'));
//! assert!(pretty.text.contains('\n'));
//! ```

/// Rendering configuration for the default emitter.
#[derive(Clone, Debug)]
pub struct DumpOptions {
    pub pretty: bool,
    pub indent: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            pretty: false,
            indent: 4,
        }
    }
}

impl DumpOptions {
    /// Creates default options (compact, single-line output).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use litdump::DumpOptions;
    ///
    /// let options = DumpOptions::new();
    /// assert!(!options.pretty);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for multi-line, indented output.
    #[must_use]
    pub fn pretty() -> Self {
        DumpOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation width (spaces per level). Only affects pretty
    /// output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
