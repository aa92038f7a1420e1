//! Rendering: turns a literal tree into a source declaration.
//!
//! The emitter is the only pluggable seam in the pipeline. Everything before
//! it (traversal, classification, naming) is target-agnostic; an emitter
//! decides concrete syntax. The default [`RustEmitter`] renders Rust
//! construction syntax, compact by default and indented in pretty mode.

use crate::node::LiteralNode;
use crate::options::DumpOptions;

/// Renders a binding identifier and a literal tree into one declaration
/// statement.
///
/// Implementations decide syntax only; they never inspect values, raise
/// diagnostics, or change the tree.
pub trait LiteralEmitter {
    /// Produces the complete declaration text for `binding = node`.
    fn emit(&self, binding: &str, node: &LiteralNode) -> String;
}

/// The default emitter: Rust `let` declarations.
///
/// # Examples
///
/// ```rust
/// use litdump::{LiteralEmitter, LiteralNode, RustEmitter};
///
/// let emitter = RustEmitter::new();
/// let node = LiteralNode::numeric_token("42".into());
/// assert_eq!(emitter.emit("answer", &node), "let answer = 42;");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RustEmitter {
    options: DumpOptions,
}

impl RustEmitter {
    /// Creates an emitter with default (compact) options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an emitter with explicit rendering options.
    #[must_use]
    pub fn with_options(options: DumpOptions) -> Self {
        RustEmitter { options }
    }

    fn expr(&self, node: &LiteralNode, depth: usize) -> String {
        match node {
            LiteralNode::Null => "None".to_string(),
            LiteralNode::Primitive { token, .. } => token.clone(),
            LiteralNode::Identifier(token) => token.clone(),
            LiteralNode::ParsedExpression { constructor, args } => {
                let rendered: Vec<String> =
                    args.iter().map(|arg| self.expr(arg, depth)).collect();
                format!("{}({})", constructor, rendered.join(", "))
            }
            LiteralNode::EnumMember { type_name, member } => {
                format!("{}::{}", type_name, member)
            }
            LiteralNode::Sequence { elem_type, items } => {
                let rendered: Vec<String> =
                    items.iter().map(|item| self.expr(item, depth + 1)).collect();
                match elem_type {
                    Some(elem) => format!(
                        "Vec::<{}>::from([{}])",
                        elem,
                        self.join(&rendered, depth)
                    ),
                    None => format!("vec![{}]", self.join(&rendered, depth)),
                }
            }
            LiteralNode::KeyedSequence(entries) => {
                let rendered: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| {
                        format!(
                            "({}, {})",
                            self.expr(k, depth + 1),
                            self.expr(v, depth + 1)
                        )
                    })
                    .collect();
                format!("HashMap::from([{}])", self.join(&rendered, depth))
            }
            LiteralNode::ObjectConstruction {
                type_name,
                properties,
            } => {
                if properties.is_empty() {
                    return format!("{} {{}}", type_name);
                }
                let rendered: Vec<String> = properties
                    .iter()
                    .map(|(name, value)| format!("{}: {}", name, self.expr(value, depth + 1)))
                    .collect();
                if self.options.pretty {
                    format!(
                        "{} {{{}}}",
                        type_name,
                        self.block(&rendered, depth)
                    )
                } else {
                    format!("{} {{ {} }}", type_name, rendered.join(", "))
                }
            }
        }
    }

    // Comma-joins collection elements, one per indented line in pretty mode.
    fn join(&self, parts: &[String], depth: usize) -> String {
        if parts.is_empty() || !self.options.pretty {
            return parts.join(", ");
        }
        self.block(parts, depth)
    }

    fn block(&self, parts: &[String], depth: usize) -> String {
        let inner = " ".repeat(self.options.indent * (depth + 1));
        let outer = " ".repeat(self.options.indent * depth);
        let mut out = String::new();
        for part in parts {
            out.push('\n');
            out.push_str(&inner);
            out.push_str(part);
            out.push(',');
        }
        out.push('\n');
        out.push_str(&outer);
        out
    }
}

impl LiteralEmitter for RustEmitter {
    fn emit(&self, binding: &str, node: &LiteralNode) -> String {
        format!("let {} = {};", binding, self.expr(node, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::PrimitiveKind;

    fn compact() -> RustEmitter {
        RustEmitter::new()
    }

    fn pretty() -> RustEmitter {
        RustEmitter::with_options(DumpOptions::pretty())
    }

    fn person() -> LiteralNode {
        LiteralNode::ObjectConstruction {
            type_name: "Person".into(),
            properties: vec![
                ("name".into(), LiteralNode::str_token("\"Alice\"".into())),
                ("age".into(), LiteralNode::numeric_token("30u8".into())),
            ],
        }
    }

    #[test]
    fn null_binds_to_none() {
        assert_eq!(compact().emit("x", &LiteralNode::Null), "let x = None;");
    }

    #[test]
    fn primitive_tokens_are_verbatim() {
        let node = LiteralNode::Primitive {
            kind: PrimitiveKind::Bool,
            token: "true".into(),
        };
        assert_eq!(compact().emit("flag", &node), "let flag = true;");
    }

    #[test]
    fn parsed_expression_renders_as_call() {
        let node = LiteralNode::ParsedExpression {
            constructor: "Guid::parse".into(),
            args: vec![LiteralNode::str_token(
                "\"024cc229-dea0-4d7a-9fc8-722e3a0c69a3\"".into(),
            )],
        };
        assert_eq!(
            compact().emit("guid", &node),
            "let guid = Guid::parse(\"024cc229-dea0-4d7a-9fc8-722e3a0c69a3\");"
        );
    }

    #[test]
    fn enum_member_is_qualified() {
        let node = LiteralNode::EnumMember {
            type_name: "Weekday".into(),
            member: "Monday".into(),
        };
        assert_eq!(compact().emit("day", &node), "let day = Weekday::Monday;");
    }

    #[test]
    fn typed_sequence_uses_from() {
        let node = LiteralNode::Sequence {
            elem_type: Some("i32".into()),
            items: vec![
                LiteralNode::numeric_token("1".into()),
                LiteralNode::numeric_token("2".into()),
            ],
        };
        assert_eq!(
            compact().emit("vecOfI32s", &node),
            "let vecOfI32s = Vec::<i32>::from([1, 2]);"
        );
    }

    #[test]
    fn untyped_sequence_uses_vec_macro() {
        let node = LiteralNode::Sequence {
            elem_type: None,
            items: vec![LiteralNode::numeric_token("1".into())],
        };
        assert_eq!(compact().emit("vec", &node), "let vec = vec![1];");
    }

    #[test]
    fn keyed_sequence_renders_pairs() {
        let node = LiteralNode::KeyedSequence(vec![(
            LiteralNode::str_token("\"one\"".into()),
            LiteralNode::numeric_token("1".into()),
        )]);
        assert_eq!(
            compact().emit("hashMap", &node),
            "let hashMap = HashMap::from([(\"one\", 1)]);"
        );
    }

    #[test]
    fn object_construction_compact() {
        assert_eq!(
            compact().emit("person", &person()),
            "let person = Person { name: \"Alice\", age: 30u8 };"
        );
    }

    #[test]
    fn empty_construction_stays_on_one_line() {
        let node = LiteralNode::empty_construction("Person");
        assert_eq!(compact().emit("person", &node), "let person = Person {};");
        assert_eq!(pretty().emit("person", &node), "let person = Person {};");
    }

    #[test]
    fn object_construction_pretty() {
        let expected = "let person = Person {\n    name: \"Alice\",\n    age: 30u8,\n};";
        assert_eq!(pretty().emit("person", &person()), expected);
    }

    #[test]
    fn nested_pretty_indents_per_level() {
        let node = LiteralNode::ObjectConstruction {
            type_name: "Organization".into(),
            properties: vec![(
                "boss".into(),
                LiteralNode::ObjectConstruction {
                    type_name: "Person".into(),
                    properties: vec![(
                        "name".into(),
                        LiteralNode::str_token("\"Alice\"".into()),
                    )],
                },
            )],
        };
        let expected = "let organization = Organization {\n    boss: Person {\n        name: \"Alice\",\n    },\n};";
        assert_eq!(pretty().emit("organization", &node), expected);
    }

    #[test]
    fn pretty_sequence_one_element_per_line() {
        let node = LiteralNode::Sequence {
            elem_type: Some("i32".into()),
            items: vec![
                LiteralNode::numeric_token("1".into()),
                LiteralNode::numeric_token("2".into()),
            ],
        };
        let expected = "let v = Vec::<i32>::from([\n    1,\n    2,\n]);";
        assert_eq!(pretty().emit("v", &node), expected);
    }

    #[test]
    fn custom_indent_width() {
        let emitter = RustEmitter::with_options(DumpOptions::pretty().with_indent(2));
        let expected = "let person = Person {\n  name: \"Alice\",\n  age: 30u8,\n};";
        assert_eq!(emitter.emit("person", &person()), expected);
    }
}
