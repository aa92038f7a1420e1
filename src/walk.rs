//! Graph traversal: turns a [`Value`] graph into a [`LiteralNode`] tree while
//! guarding against cycles.
//!
//! The walker recurses through sequences, keyed sequences and objects,
//! delegating every simple value to the literal policy in
//! [`classify`](crate::classify). Object identities are tracked for the whole
//! call, so a second encounter of the same object (a cycle, or a diamond
//! share) collapses to an empty construction instead of recursing forever.

use std::collections::HashSet;

use crate::classify;
use crate::diag::Diagnostic;
use crate::node::LiteralNode;
use crate::object::{ObjRef, PropertyValue};
use crate::value::{Sequence, Value};

/// Tracks object identities already visited within a single dump call.
///
/// Identity is pointer identity of the shared object handle, so two objects
/// with identical contents are still distinct, and the same handle reached
/// along two paths is recognized as one.
#[derive(Debug, Default)]
pub struct CycleGuard {
    visited: HashSet<usize>,
}

impl CycleGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the object as visited. Returns `true` on first entry and
    /// `false` if this identity was already seen in this call.
    pub fn try_enter(&mut self, obj: &ObjRef) -> bool {
        self.visited.insert(obj.identity())
    }
}

/// One traversal of a value graph. Collects diagnostics as it goes; the
/// visited set persists across the whole walk.
#[derive(Debug, Default)]
pub struct GraphWalker {
    guard: CycleGuard,
    diagnostics: Vec<Diagnostic>,
}

impl GraphWalker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks a full graph in one shot, returning the literal tree and every
    /// diagnostic raised along the way.
    pub fn run(value: &Value) -> (LiteralNode, Vec<Diagnostic>) {
        let mut walker = GraphWalker::new();
        let node = walker.walk(value);
        (node, walker.diagnostics)
    }

    /// Converts one value (and everything reachable from it) into a literal
    /// node.
    pub fn walk(&mut self, value: &Value) -> LiteralNode {
        match value {
            Value::Seq(seq) => self.walk_sequence(seq),
            Value::Map(entries) => LiteralNode::KeyedSequence(
                entries
                    .iter()
                    .map(|(k, v)| (self.walk(k), self.walk(v)))
                    .collect(),
            ),
            Value::Object(obj) => self.walk_object(obj),
            simple => classify::literal(simple, &mut self.diagnostics),
        }
    }

    fn walk_sequence(&mut self, seq: &Sequence) -> LiteralNode {
        let elem_type = self.resolve_elem_type(seq);
        LiteralNode::Sequence {
            elem_type,
            items: seq.items.iter().map(|item| self.walk(item)).collect(),
        }
    }

    fn resolve_elem_type(&mut self, seq: &Sequence) -> Option<String> {
        let resolved = seq.resolved_elem_type();
        if resolved.is_none() {
            self.diagnostics.push(Diagnostic::UntypedSequence);
        }
        resolved
    }

    fn walk_object(&mut self, obj: &ObjRef) -> LiteralNode {
        if !self.guard.try_enter(obj) {
            self.diagnostics.push(Diagnostic::CycleCollapsed {
                type_name: obj.type_name(),
            });
            return LiteralNode::empty_construction(&obj.type_name());
        }
        let inner = obj.borrow();
        let properties = inner
            .properties()
            .iter()
            .map(|(name, slot)| {
                let node = match slot {
                    PropertyValue::Readable(value) => self.walk(value),
                    PropertyValue::Unreadable(message) => {
                        self.diagnostics.push(Diagnostic::PropertyRead {
                            property: name.to_string(),
                            message: message.clone(),
                        });
                        // Placeholder literal embedding the failure message.
                        LiteralNode::str_token(classify::str_token(&format!("{{{}}}", message)))
                    }
                };
                (name.to_string(), node)
            })
            .collect();
        LiteralNode::ObjectConstruction {
            type_name: inner.type_name().to_string(),
            properties,
        }
    }
}
