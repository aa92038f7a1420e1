//! Dynamic value representation for dumpable object graphs.
//!
//! Rust has no runtime reflection, so the graph handed to the dumper is an
//! explicit model: the [`Value`] enum. It covers every category the literal
//! policy knows how to reconstruct: primitives with their concrete numeric
//! width, strings and chars, GUIDs, the three temporal kinds, time spans,
//! enums, ordered sequences and keyed sequences, and shared object handles
//! that may form cycles.
//!
//! ## Creating values
//!
//! ```rust
//! use litdump::Value;
//!
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let age = Value::from(30u8);
//! let name = Value::from("Alice");
//! ```
//!
//! Values can also be produced from any `T: Serialize` via
//! [`to_value`](crate::to_value), or built with the [`graph!`](crate::graph)
//! macro.

use crate::object::ObjRef;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};
use std::fmt;

/// A dynamically-typed value in a dumpable object graph.
///
/// Simple variants (everything except [`Seq`](Value::Seq),
/// [`Map`](Value::Map) and [`Object`](Value::Object)) have a direct literal
/// form and never recurse; the rest are traversed property-by-property or
/// element-by-element by the walker.
///
/// # Examples
///
/// ```rust
/// use litdump::Value;
///
/// let v = Value::from(42i64);
/// assert!(v.is_simple());
/// assert!(!v.is_null());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    Guid(u128),
    Temporal(Temporal),
    Span(TimeDelta),
    Enum(EnumValue),
    Seq(Sequence),
    Map(Vec<(Value, Value)>),
    Object(ObjRef),
    Opaque(Opaque),
}

/// A numeric value that remembers its concrete width.
///
/// Literal suffixes differ per type (`0u32`, `0i64`, `0f32`, …), so the model
/// must preserve which concrete numeric type a value is rather than widening
/// everything to `i64`/`f64`.
///
/// # Examples
///
/// ```rust
/// use litdump::Number;
///
/// let n = Number::U8(7);
/// assert_eq!(n.type_name(), "u8");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Number {
    /// The Rust type name of this number's concrete width.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Number::I8(_) => "i8",
            Number::I16(_) => "i16",
            Number::I32(_) => "i32",
            Number::I64(_) => "i64",
            Number::U8(_) => "u8",
            Number::U16(_) => "u16",
            Number::U32(_) => "u32",
            Number::U64(_) => "u64",
            Number::F32(_) => "f32",
            Number::F64(_) => "f64",
        }
    }

    /// Returns `true` for the floating-point widths.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }

    /// Converts to `i64` when the value fits without loss.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::I8(v) => Some(v as i64),
            Number::I16(v) => Some(v as i64),
            Number::I32(v) => Some(v as i64),
            Number::I64(v) => Some(v),
            Number::U8(v) => Some(v as i64),
            Number::U16(v) => Some(v as i64),
            Number::U32(v) => Some(v as i64),
            Number::U64(v) => i64::try_from(v).ok(),
            Number::F32(_) | Number::F64(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::I8(v) => write!(f, "{}", v),
            Number::I16(v) => write!(f, "{}", v),
            Number::I32(v) => write!(f, "{}", v),
            Number::I64(v) => write!(f, "{}", v),
            Number::U8(v) => write!(f, "{}", v),
            Number::U16(v) => write!(f, "{}", v),
            Number::U32(v) => write!(f, "{}", v),
            Number::U64(v) => write!(f, "{}", v),
            Number::F32(v) => write!(f, "{}", v),
            Number::F64(v) => write!(f, "{}", v),
        }
    }
}

/// A date-time value together with its temporal kind.
///
/// The kind decides the suffix of the round-trip string the classifier
/// produces: `Z` for UTC, an explicit `+HH:MM`/`-HH:MM` offset, or no suffix
/// at all for an unspecified (naive) time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Temporal {
    Utc(DateTime<Utc>),
    Offset(DateTime<FixedOffset>),
    Unspecified(NaiveDateTime),
}

/// An enumeration value: the type name plus either a named member or, when
/// the runtime value has no corresponding member, just the raw discriminant.
///
/// # Examples
///
/// ```rust
/// use litdump::Value;
///
/// let mapped = Value::enum_member("Weekday", "Monday", 0);
/// let unmapped = Value::enum_raw("Weekday", 17);
/// assert!(mapped.is_simple() && unmapped.is_simple());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub type_name: String,
    pub member: Option<String>,
    pub raw: i64,
}

/// An ordered sequence with an optional declared element type.
///
/// `elem_type` is the hint the emitter may use to type the collection
/// construction. When the declared type is missing or too deeply generic, the
/// walker falls back to the first element's runtime type; an empty such
/// sequence cannot be element-typed and degrades to an untyped construction.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Sequence {
    pub elem_type: Option<String>,
    pub items: Vec<Value>,
}

impl Sequence {
    /// Resolves the element type used for naming and for typing the emitted
    /// construction. The declared hint wins when it is simple enough to name;
    /// otherwise the first element's runtime type stands in. `None` for an
    /// empty sequence with no usable hint.
    #[must_use]
    pub fn resolved_elem_type(&self) -> Option<String> {
        if let Some(declared) = self.elem_type.as_deref() {
            if declared.matches('<').count() <= 1 && !declared.contains(',') {
                return Some(declared.to_string());
            }
        }
        self.items.first().map(Value::type_display)
    }
}

/// A value with no structured representation, carrying at most the display
/// text of the original. The classifier's fallback path checks whether that
/// text can stand as an expression before degrading to null.
#[derive(Clone, Debug, PartialEq)]
pub struct Opaque {
    pub type_name: String,
    pub repr: Option<String>,
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value has a direct literal form and never
    /// requires recursion: everything except sequences, maps and objects.
    #[inline]
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        !matches!(self, Value::Seq(_) | Value::Map(_) | Value::Object(_))
    }

    /// Returns `true` if the value is a complex object handle.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an object handle, returns it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Builds an untyped sequence from its elements.
    #[must_use]
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Seq(Sequence {
            elem_type: None,
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Builds a sequence with a declared element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use litdump::Value;
    ///
    /// let v = Value::seq_of("String", ["aaa", "bbb"]);
    /// ```
    #[must_use]
    pub fn seq_of<I>(elem_type: &str, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Seq(Sequence {
            elem_type: Some(elem_type.to_string()),
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Builds an enumeration value with a named member.
    #[must_use]
    pub fn enum_member(type_name: &str, member: &str, raw: i64) -> Self {
        Value::Enum(EnumValue {
            type_name: type_name.to_string(),
            member: Some(member.to_string()),
            raw,
        })
    }

    /// Builds an enumeration value with no corresponding named member.
    #[must_use]
    pub fn enum_raw(type_name: &str, raw: i64) -> Self {
        Value::Enum(EnumValue {
            type_name: type_name.to_string(),
            member: None,
            raw,
        })
    }

    /// Builds an opaque value carrying only a type name.
    #[must_use]
    pub fn opaque(type_name: &str) -> Self {
        Value::Opaque(Opaque {
            type_name: type_name.to_string(),
            repr: None,
        })
    }

    /// Builds an opaque value carrying its display text.
    #[must_use]
    pub fn opaque_with_repr(type_name: &str, repr: &str) -> Self {
        Value::Opaque(Opaque {
            type_name: type_name.to_string(),
            repr: Some(repr.to_string()),
        })
    }

    /// The formatted runtime type name of this value, as used by the
    /// identifier namer and by element-type resolution.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use litdump::Value;
    ///
    /// assert_eq!(Value::from(1u8).type_display(), "u8");
    /// assert_eq!(Value::from("x").type_display(), "String");
    /// ```
    #[must_use]
    pub fn type_display(&self) -> String {
        match self {
            Value::Null => "()".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Number(n) => n.type_name().to_string(),
            Value::Char(_) => "char".to_string(),
            Value::Str(_) => "String".to_string(),
            Value::Bytes(_) => "Vec<u8>".to_string(),
            Value::Guid(_) => "Guid".to_string(),
            Value::Temporal(Temporal::Utc(_)) | Value::Temporal(Temporal::Offset(_)) => {
                "DateTime".to_string()
            }
            Value::Temporal(Temporal::Unspecified(_)) => "NaiveDateTime".to_string(),
            Value::Span(_) => "TimeDelta".to_string(),
            Value::Enum(e) => e.type_name.clone(),
            Value::Seq(seq) => match seq.resolved_elem_type() {
                Some(elem) => format!("Vec<{}>", elem),
                None => "Vec".to_string(),
            },
            Value::Map(_) => "HashMap".to_string(),
            Value::Object(obj) => obj.type_name(),
            Value::Opaque(o) => o.type_name.clone(),
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::$variant(value)
                }
            }

            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(Number::$variant(value))
                }
            }
        )*
    };
}

impl_from_number! {
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    f32 => F32, f64 => F64,
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Temporal(Temporal::Utc(value))
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Temporal(Temporal::Offset(value))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Temporal(Temporal::Unspecified(value))
    }
}

impl From<TimeDelta> for Value {
    fn from(value: TimeDelta) -> Self {
        Value::Span(value)
    }
}

impl From<ObjRef> for Value {
    fn from(value: ObjRef) -> Self {
        Value::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(Sequence {
            elem_type: None,
            items,
        })
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
