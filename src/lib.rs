//! # litdump
//!
//! Dump runtime value graphs as source-code literals: declarations that, when
//! pasted into a program, reconstruct the dumped value.
//!
//! ## What is a dump?
//!
//! A dump is one complete `let` statement. The binding name is derived from
//! the value's type, and the right-hand side is a construction expression
//! that rebuilds the value:
//!
//! ```text
//! let person = Person { name: "Alice", age: 30u8 };
//! ```
//!
//! The primary use is turning values observed at runtime (a debugger watch, a
//! captured payload, a failing production input) into test fixtures.
//!
//! ## Key Features
//!
//! - **Faithful literals**: Numeric widths keep their suffixes, date-times
//!   round-trip through ISO-8601 parse expressions, GUIDs through their
//!   canonical form
//! - **Cycle Safe**: Cyclic and shared object graphs always terminate; a
//!   repeated reference collapses to an empty construction
//! - **Never Fails**: A dump always produces syntactically valid output;
//!   every degradation is reported as a structured [`Diagnostic`]
//! - **Serde Compatible**: Any `#[derive(Serialize)]` type dumps directly
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! litdump = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Dumping Serializable Types
//!
//! ```rust
//! use litdump::dump;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Person {
//!     name: String,
//!     age: u8,
//! }
//!
//! let person = Person { name: "Alice".to_string(), age: 30 };
//! let out = dump(&person).unwrap();
//! assert_eq!(out.text, "let person = Person { name: \"Alice\", age: 30u8 };");
//! ```
//!
//! ### Dynamic Graphs with the graph! Macro
//!
//! Graphs that need cycles, shared references, GUIDs or temporal kinds are
//! built as [`Value`] trees, by hand or with the macro:
//!
//! ```rust
//! use litdump::{dump_value, graph};
//!
//! let data = graph!(Organization {
//!     "name": "developers",
//!     "tags": ["rust", "serde"],
//! });
//!
//! let out = dump_value(&data);
//! assert!(out.text.starts_with("let organization = Organization {"));
//! ```
//!
//! ### Cyclic Graphs
//!
//! ```rust
//! use litdump::{dump_value, Obj, Value};
//!
//! let person = Obj::new("RecursivePerson").build();
//! person.set("parent", Value::Object(person.clone()));
//!
//! let out = dump_value(&Value::Object(person));
//! assert_eq!(
//!     out.text,
//!     "let recursivePerson = RecursivePerson { parent: RecursivePerson {} };"
//! );
//! assert!(out.is_lossy());
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Dumping never panics and never fails; only the serde bridge returns
//!   errors, for shapes the value model cannot hold
//! - Cyclic input always terminates
//!
//! ## Pipeline
//!
//! Dumping is three stages, each replaceable only at the final seam:
//!
//! 1. [`walk`]: traverse the [`Value`] graph into a [`LiteralNode`] tree,
//!    classifying simple values through the literal policy in [`classify`]
//! 2. [`name`]: derive the binding identifier from the value's type
//! 3. [`emit`]: render the tree as source text through a [`LiteralEmitter`]

pub mod classify;
pub mod diag;
pub mod dump;
pub mod emit;
pub mod error;
pub mod macros;
pub mod name;
pub mod node;
pub mod object;
pub mod options;
pub mod ser;
pub mod value;
pub mod walk;

pub use diag::{Diagnostic, Dump};
pub use dump::Dumper;
pub use emit::{LiteralEmitter, RustEmitter};
pub use error::{Error, Result};
pub use node::{LiteralNode, PrimitiveKind};
pub use object::{Obj, ObjRef, PropertyMap, PropertyValue};
pub use options::DumpOptions;
pub use ser::{to_value, ValueSerializer};
pub use value::{EnumValue, Number, Opaque, Sequence, Temporal, Value};

use serde::Serialize;

/// Dumps a serializable value as a compact declaration.
///
/// # Examples
///
/// ```rust
/// use litdump::dump;
///
/// let out = dump(&vec![1i32, 2, 3]).unwrap();
/// assert_eq!(out.text, "let vecOfi32s = Vec::<i32>::from([1, 2, 3]);");
/// ```
pub fn dump<T>(value: &T) -> Result<Dump>
where
    T: ?Sized + Serialize,
{
    Dumper::new().dump(value)
}

/// Dumps a serializable value with explicit rendering options.
///
/// # Examples
///
/// ```rust
/// use litdump::{dump_with_options, DumpOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let out = dump_with_options(&Point { x: 1, y: 2 }, DumpOptions::pretty()).unwrap();
/// assert_eq!(out.text, "let point = Point {\n    x: 1,\n    y: 2,\n};");
/// ```
pub fn dump_with_options<T>(value: &T, options: DumpOptions) -> Result<Dump>
where
    T: ?Sized + Serialize,
{
    Dumper::with_options(options).dump(value)
}

/// Dumps an already-built value graph as a compact declaration. Infallible.
///
/// # Examples
///
/// ```rust
/// use litdump::{dump_value, Value};
///
/// assert_eq!(dump_value(&Value::Null).text, "let x = None;");
/// ```
#[must_use]
pub fn dump_value(value: &Value) -> Dump {
    Dumper::new().dump_value(value)
}

/// Dumps an already-built value graph with explicit rendering options.
#[must_use]
pub fn dump_value_with_options(value: &Value, options: DumpOptions) -> Dump {
    Dumper::with_options(options).dump_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_door_functions_agree_with_the_dumper() {
        let out = dump_value(&Value::from(true));
        assert_eq!(out.text, "let bool = true;");
        assert_eq!(out, Dumper::new().dump_value(&Value::from(true)));
    }

    #[test]
    fn pretty_options_reach_the_emitter() {
        let person = Obj::new("Person").prop("name", "Alice").build();
        let value = Value::Object(person);
        let out = dump_value_with_options(&value, DumpOptions::pretty());
        assert!(out.text.contains('\n'));
    }
}
