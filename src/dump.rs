//! The dumper: the front door tying naming, traversal and rendering together.
//!
//! A dump never fails. Every degradation encountered on the way is recovered
//! locally and surfaced in [`Dump::diagnostics`]; the text is always a
//! complete, syntactically valid declaration. Only the serde bridge can
//! error, when a `T: Serialize` produces a shape the value model cannot hold.

use serde::Serialize;

use crate::diag::Dump;
use crate::emit::{LiteralEmitter, RustEmitter};
use crate::error::Result;
use crate::name;
use crate::options::DumpOptions;
use crate::ser;
use crate::value::Value;
use crate::walk::GraphWalker;

/// Converts runtime values into declaration statements.
///
/// # Examples
///
/// ```rust
/// use litdump::{Dumper, Value};
///
/// let dumper = Dumper::new();
/// let out = dumper.dump_value(&Value::from(42i32));
/// assert_eq!(out.text, "let i32 = 42;");
/// ```
pub struct Dumper {
    emitter: Box<dyn LiteralEmitter>,
}

impl Dumper {
    /// Creates a dumper with the default Rust emitter in compact mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dumper with the default Rust emitter and explicit rendering
    /// options.
    #[must_use]
    pub fn with_options(options: DumpOptions) -> Self {
        Dumper {
            emitter: Box::new(RustEmitter::with_options(options)),
        }
    }

    /// Creates a dumper rendering through a custom emitter.
    #[must_use]
    pub fn with_emitter(emitter: Box<dyn LiteralEmitter>) -> Self {
        Dumper { emitter }
    }

    /// Dumps any serializable value.
    ///
    /// The value is first converted into a [`Value`] graph over the serde
    /// bridge, then dumped. Conversion is the only step that can fail.
    pub fn dump<T>(&self, value: &T) -> Result<Dump>
    where
        T: ?Sized + Serialize,
    {
        Ok(self.dump_value(&ser::to_value(value)?))
    }

    /// Dumps an already-built value graph. Infallible.
    #[must_use]
    pub fn dump_value(&self, value: &Value) -> Dump {
        let binding = name::variable_name(value);
        let (node, diagnostics) = GraphWalker::run(value);
        Dump {
            text: self.emitter.emit(&binding, &node),
            diagnostics,
        }
    }
}

impl Default for Dumper {
    fn default() -> Self {
        Dumper {
            emitter: Box::new(RustEmitter::new()),
        }
    }
}

impl std::fmt::Debug for Dumper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dumper").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::LiteralNode;
    use crate::object::Obj;

    #[test]
    fn null_dumps_to_the_fallback_binding() {
        let out = Dumper::new().dump_value(&Value::Null);
        assert_eq!(out.text, "let x = None;");
        assert!(!out.is_lossy());
    }

    #[test]
    fn binding_comes_from_the_value_type() {
        let person = Obj::new("Person").prop("name", "Alice").build();
        let out = Dumper::new().dump_value(&Value::Object(person));
        assert_eq!(out.text, "let person = Person { name: \"Alice\" };");
    }

    #[test]
    fn options_flow_through_to_the_emitter() {
        let person = Obj::new("Person").prop("name", "Alice").build();
        let out = Dumper::with_options(DumpOptions::pretty()).dump_value(&Value::Object(person));
        assert_eq!(out.text, "let person = Person {\n    name: \"Alice\",\n};");
    }

    #[test]
    fn custom_emitter_is_honored() {
        struct Terse;
        impl LiteralEmitter for Terse {
            fn emit(&self, binding: &str, node: &LiteralNode) -> String {
                format!("{}?{}", binding, node.is_null())
            }
        }
        let out = Dumper::with_emitter(Box::new(Terse)).dump_value(&Value::Null);
        assert_eq!(out.text, "x?true");
    }

    #[test]
    fn unsized_serialize_targets_are_accepted() {
        let text: &str = "hello";
        let out = Dumper::new().dump(text).unwrap();
        assert_eq!(out.text, "let string = \"hello\";");
    }

    #[test]
    fn serializable_input_goes_over_the_bridge() {
        #[derive(serde::Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }
        let out = Dumper::new().dump(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(out.text, "let point = Point { x: 1, y: 2 };");
        assert!(!out.is_lossy());
    }
}
