//! The literal tree: a target-language-agnostic representation of a value's
//! reconstruction expression.
//!
//! The walker and classifier produce [`LiteralNode`] trees; an emitter turns
//! a tree into source text. Nodes are created fresh per dump call and
//! discarded after rendering.

/// A tagged variant describing one reconstruction expression.
///
/// Token-carrying variants ([`Primitive`](LiteralNode::Primitive) and
/// [`Identifier`](LiteralNode::Identifier)) hold text already rendered by the
/// literal policy; the emitter prints those verbatim and only decides layout
/// for the structural variants.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralNode {
    /// The null literal.
    Null,
    /// A primitive literal token: boolean, numeric (suffix included), string
    /// or character, fully rendered.
    Primitive { kind: PrimitiveKind, token: String },
    /// A named-constant reference, used for sentinel forms of temporal types
    /// and for non-finite floats.
    Identifier(String),
    /// A round-trip constructor call: dates, time spans, GUIDs, and opaque
    /// values that could be carried over verbatim.
    ParsedExpression {
        constructor: String,
        args: Vec<LiteralNode>,
    },
    /// A qualified enum member reference.
    EnumMember { type_name: String, member: String },
    /// An ordered collection construction. `elem_type` is the resolved
    /// element type hint, absent when it could not be determined.
    Sequence {
        elem_type: Option<String>,
        items: Vec<LiteralNode>,
    },
    /// A keyed collection construction, rendered as a sequence of pairs.
    KeyedSequence(Vec<(LiteralNode, LiteralNode)>),
    /// A named construction assigning each property in declared order.
    ObjectConstruction {
        type_name: String,
        properties: Vec<(String, LiteralNode)>,
    },
}

/// The literal category of a [`LiteralNode::Primitive`] token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Bool,
    Numeric,
    Str,
    Char,
}

impl LiteralNode {
    /// A rendered string-literal token.
    #[must_use]
    pub fn str_token(token: String) -> Self {
        LiteralNode::Primitive {
            kind: PrimitiveKind::Str,
            token,
        }
    }

    /// A rendered numeric token.
    #[must_use]
    pub fn numeric_token(token: String) -> Self {
        LiteralNode::Primitive {
            kind: PrimitiveKind::Numeric,
            token,
        }
    }

    /// An empty construction for the given type, produced when a repeated
    /// object identity is collapsed.
    #[must_use]
    pub fn empty_construction(type_name: &str) -> Self {
        LiteralNode::ObjectConstruction {
            type_name: type_name.to_string(),
            properties: Vec::new(),
        }
    }

    /// Returns `true` if the node is the null literal.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, LiteralNode::Null)
    }

    /// Returns `true` for nodes that render on a single token or call, with
    /// no nested construction layout of their own.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(
            self,
            LiteralNode::Null
                | LiteralNode::Primitive { .. }
                | LiteralNode::Identifier(_)
                | LiteralNode::EnumMember { .. }
                | LiteralNode::ParsedExpression { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_versus_structural() {
        assert!(LiteralNode::Null.is_leaf());
        assert!(LiteralNode::Identifier("TimeDelta::MIN".into()).is_leaf());
        assert!(!LiteralNode::empty_construction("Person").is_leaf());
        assert!(!LiteralNode::Sequence {
            elem_type: None,
            items: Vec::new()
        }
        .is_leaf());
    }

    #[test]
    fn empty_construction_has_no_properties() {
        match LiteralNode::empty_construction("RecursivePerson") {
            LiteralNode::ObjectConstruction {
                type_name,
                properties,
            } => {
                assert_eq!(type_name, "RecursivePerson");
                assert!(properties.is_empty());
            }
            _ => panic!("expected object construction"),
        }
    }
}
