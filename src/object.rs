//! Complex object handles and their ordered property maps.
//!
//! A complex object is anything reconstructed property-by-property via a
//! named construction. Two aspects matter here:
//!
//! - **Order**: properties enumerate in declared order, stable across calls,
//!   so the map is backed by [`IndexMap`] (same choice as any deterministic
//!   serializer).
//! - **Identity**: object graphs can share nodes and form cycles, so objects
//!   live behind [`ObjRef`], a cheap shared handle. The cycle guard keys on
//!   the handle's pointer identity, never on a hash of the contents.
//!
//! ## Examples
//!
//! ```rust
//! use litdump::{Obj, Value};
//!
//! let person = Obj::new("Person")
//!     .prop("name", Value::from("Alice"))
//!     .prop("age", Value::from(30u8))
//!     .build();
//!
//! assert_eq!(person.type_name(), "Person");
//! assert_eq!(person.len(), 2);
//! ```
//!
//! Cycles are created by inserting a handle into an object it can reach:
//!
//! ```rust
//! use litdump::{Obj, Value};
//!
//! let node = Obj::new("Node").build();
//! node.set("next", Value::Object(node.clone()));
//! ```

use crate::value::Value;
use indexmap::IndexMap;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// One property slot: either a readable value, or the failure message left
/// behind when reading it raised. An unreadable slot never aborts a dump; the
/// walker substitutes a diagnostic placeholder literal.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Readable(Value),
    Unreadable(String),
}

/// An insertion-ordered map of property names to property slots.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PropertyMap(IndexMap<String, PropertyValue>);

impl PropertyMap {
    /// Creates an empty property map.
    #[must_use]
    pub fn new() -> Self {
        PropertyMap(IndexMap::new())
    }

    /// Inserts a readable property, returning any previous slot.
    pub fn insert(&mut self, name: String, value: Value) -> Option<PropertyValue> {
        self.0.insert(name, PropertyValue::Readable(value))
    }

    /// Inserts an unreadable property carrying its failure message.
    pub fn insert_unreadable(&mut self, name: String, message: String) -> Option<PropertyValue> {
        self.0.insert(name, PropertyValue::Unreadable(message))
    }

    /// Returns the slot for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates name/slot pairs in declared order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, PropertyValue> {
        self.0.iter()
    }
}

impl FromIterator<(String, PropertyValue)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (String, PropertyValue)>>(iter: T) -> Self {
        PropertyMap(IndexMap::from_iter(iter))
    }
}

/// A complex object: a type name plus its properties in declared order.
#[derive(Clone, Debug, PartialEq)]
pub struct Obj {
    type_name: String,
    properties: PropertyMap,
}

impl Obj {
    /// Starts building an object of the given type.
    #[must_use]
    pub fn new(type_name: &str) -> ObjBuilder {
        ObjBuilder {
            type_name: type_name.to_string(),
            properties: PropertyMap::new(),
        }
    }

    /// The object's type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The object's properties in declared order.
    #[must_use]
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

/// Builder for [`Obj`], producing an [`ObjRef`] handle.
pub struct ObjBuilder {
    type_name: String,
    properties: PropertyMap,
}

impl ObjBuilder {
    /// Adds a readable property. Declared order is insertion order.
    #[must_use]
    pub fn prop(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    /// Adds a property whose read failed with the given message.
    #[must_use]
    pub fn unreadable(mut self, name: &str, message: &str) -> Self {
        self.properties
            .insert_unreadable(name.to_string(), message.to_string());
        self
    }

    /// Finishes the object and wraps it in a shared handle.
    #[must_use]
    pub fn build(self) -> ObjRef {
        ObjRef(Rc::new(RefCell::new(Obj {
            type_name: self.type_name,
            properties: self.properties,
        })))
    }
}

/// A shared, interiorly-mutable handle to a complex object.
///
/// Cloning the handle shares the underlying object, which is what allows a
/// graph to reference the same object twice or to contain itself. Equality on
/// handles is pointer identity, for the same reason the cycle guard uses it:
/// structural comparison cannot terminate on a cyclic graph.
#[derive(Clone, Debug)]
pub struct ObjRef(Rc<RefCell<Obj>>);

impl ObjRef {
    /// The object's type name.
    #[must_use]
    pub fn type_name(&self) -> String {
        self.0.borrow().type_name.clone()
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().properties.len()
    }

    /// Returns `true` if the object has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().properties.is_empty()
    }

    /// Borrows the object for reading.
    ///
    /// # Panics
    ///
    /// Panics if the object is mutably borrowed, which cannot happen during a
    /// dump: traversal only takes shared borrows.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Obj> {
        self.0.borrow()
    }

    /// Sets a property after construction. This is how cyclic and shared
    /// graphs are built.
    pub fn set(&self, name: &str, value: impl Into<Value>) {
        self.0
            .borrow_mut()
            .properties
            .insert(name.to_string(), value.into());
    }

    /// The per-call identity key for this object: the address of the shared
    /// allocation. Stable for the handle's lifetime and collision-free,
    /// unlike a hash of the contents.
    #[must_use]
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl PartialEq for ObjRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ {} properties }}", self.type_name(), self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_keep_declared_order() {
        let obj = Obj::new("Person")
            .prop("name", "Alice")
            .prop("age", 30u8)
            .prop("active", true)
            .build();

        let borrowed = obj.borrow();
        let names: Vec<_> = borrowed.properties().iter().map(|(n, _)| n.clone()).collect();
        assert_eq!(names, vec!["name", "age", "active"]);
    }

    #[test]
    fn identity_is_per_handle_not_per_content() {
        let a = Obj::new("Person").prop("name", "Alice").build();
        let b = Obj::new("Person").prop("name", "Alice").build();

        assert_ne!(a.identity(), b.identity());
        assert_eq!(a.identity(), a.clone().identity());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn set_after_build_reaches_all_handles() {
        let node = Obj::new("Node").build();
        let alias = node.clone();
        node.set("next", Value::Object(alias.clone()));

        assert_eq!(alias.len(), 1);
        assert!(alias.borrow().properties().get("next").is_some());
    }

    #[test]
    fn unreadable_slot_keeps_message() {
        let obj = Obj::new("Broken").unreadable("secret", "boom").build();
        let borrowed = obj.borrow();
        assert_eq!(
            borrowed.properties().get("secret"),
            Some(&PropertyValue::Unreadable("boom".to_string()))
        );
    }
}
