//! The literal policy: a deterministic, total mapping from a simple value to
//! its reconstruction expression.
//!
//! Every simple category has an unambiguous, loss-free literal form except
//! the opaque fallback, which is inherently best-effort: an arbitrary unknown
//! value cannot be generically reconstructed from text. The fallback performs
//! an explicit capability check on the value's display text and degrades to
//! null (with a warning and a diagnostic) when it fails, so classification
//! never raises.

use crate::diag::Diagnostic;
use crate::node::{LiteralNode, PrimitiveKind};
use crate::value::{Number, Opaque, Temporal, Value};
use chrono::{DateTime, Datelike, NaiveDateTime, TimeDelta, Timelike, Utc};

/// Round-trip format for zoned date-times: ISO-8601 with fractional seconds
/// and an offset suffix (`Z` or `±HH:MM`). Locale-independent by
/// construction.
pub const DATE_TIME_ROUND_TRIP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%#z";

/// Round-trip format for unspecified (naive) date-times: no offset suffix.
pub const NAIVE_ROUND_TRIP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Round-trip format for time spans, sign preserved for negative spans.
pub const SPAN_ROUND_TRIP_FORMAT: &str = "d.hh:mm:ss.fffffff";

/// Maps a simple value to its literal node.
///
/// Total for every value: the walker traverses sequences, maps and objects
/// before consulting the policy, so a structural value handed here directly
/// has no standalone literal form and degrades to null with a diagnostic.
pub fn literal(value: &Value, diagnostics: &mut Vec<Diagnostic>) -> LiteralNode {
    match value {
        Value::Null => LiteralNode::Null,
        Value::Bool(b) => LiteralNode::Primitive {
            kind: PrimitiveKind::Bool,
            token: if *b { "true" } else { "false" }.to_string(),
        },
        Value::Number(n) => number_literal(*n),
        Value::Char(c) => LiteralNode::Primitive {
            kind: PrimitiveKind::Char,
            token: char_token(*c),
        },
        Value::Str(s) => LiteralNode::str_token(str_token(s)),
        // Byte arrays are represented as a type default rather than literal
        // contents; a documented reduced-fidelity form.
        Value::Bytes(_) => LiteralNode::Identifier("Vec::default()".to_string()),
        Value::Guid(g) => LiteralNode::ParsedExpression {
            constructor: "Guid::parse".to_string(),
            args: vec![LiteralNode::str_token(str_token(&guid_canonical(*g)))],
        },
        Value::Temporal(t) => temporal_literal(t),
        Value::Span(d) => span_literal(*d),
        Value::Enum(e) => match &e.member {
            Some(member) => LiteralNode::EnumMember {
                type_name: e.type_name.clone(),
                member: member.clone(),
            },
            None => {
                log::warn!(
                    "enum `{}` has no member for value {}; emitting the raw number",
                    e.type_name,
                    e.raw
                );
                diagnostics.push(Diagnostic::UnmappedEnum {
                    type_name: e.type_name.clone(),
                    raw: e.raw,
                });
                LiteralNode::numeric_token(e.raw.to_string())
            }
        },
        Value::Opaque(o) => opaque_literal(o, diagnostics),
        Value::Seq(_) | Value::Map(_) | Value::Object(_) => {
            let type_name = value.type_display();
            log::warn!(
                "`{}` reached the literal policy without traversal; degrading to null",
                type_name
            );
            diagnostics.push(Diagnostic::Unrepresentable { type_name });
            LiteralNode::Null
        }
    }
}

fn number_literal(n: Number) -> LiteralNode {
    match n {
        Number::F32(v) if !v.is_finite() => LiteralNode::Identifier(float_constant("f32", v as f64)),
        Number::F64(v) if !v.is_finite() => LiteralNode::Identifier(float_constant("f64", v)),
        _ => LiteralNode::numeric_token(number_token(n)),
    }
}

fn float_constant(width: &str, v: f64) -> String {
    if v.is_nan() {
        format!("{}::NAN", width)
    } else if v > 0.0 {
        format!("{}::INFINITY", width)
    } else {
        format!("{}::NEG_INFINITY", width)
    }
}

/// Renders a finite number as a Rust literal token.
///
/// `i32` and `f64` are the language's inference defaults and stay
/// suffix-free (`f64` always carries a decimal point or exponent so it still
/// reads as a float); every other width gets its explicit suffix.
#[must_use]
pub fn number_token(n: Number) -> String {
    match n {
        Number::I32(v) => v.to_string(),
        Number::I8(v) => format!("{}i8", v),
        Number::I16(v) => format!("{}i16", v),
        Number::I64(v) => format!("{}i64", v),
        Number::U8(v) => format!("{}u8", v),
        Number::U16(v) => format!("{}u16", v),
        Number::U32(v) => format!("{}u32", v),
        Number::U64(v) => format!("{}u64", v),
        Number::F32(v) => format!("{}f32", v),
        Number::F64(v) => {
            let mut s = v.to_string();
            if !s.contains('.') && !s.contains('e') && !s.contains('E') {
                s.push_str(".0");
            }
            s
        }
    }
}

/// Renders a quoted, escaped Rust string literal.
#[must_use]
pub fn str_token(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Renders a quoted, escaped Rust character literal.
#[must_use]
pub fn char_token(c: char) -> String {
    match c {
        '\'' => "'\\''".to_string(),
        '\\' => "'\\\\'".to_string(),
        '\n' => "'\\n'".to_string(),
        '\r' => "'\\r'".to_string(),
        '\t' => "'\\t'".to_string(),
        '\0' => "'\\0'".to_string(),
        c if c.is_control() => format!("'\\u{{{:x}}}'", c as u32),
        c => format!("'{}'", c),
    }
}

/// The canonical lowercase hyphenated GUID form (8-4-4-4-12).
#[must_use]
pub fn guid_canonical(g: u128) -> String {
    let hex = format!("{:032x}", g);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

fn temporal_literal(t: &Temporal) -> LiteralNode {
    match t {
        Temporal::Utc(dt) => {
            if *dt == DateTime::<Utc>::MIN_UTC {
                LiteralNode::Identifier("DateTime::<Utc>::MIN_UTC".to_string())
            } else if *dt == DateTime::<Utc>::MAX_UTC {
                LiteralNode::Identifier("DateTime::<Utc>::MAX_UTC".to_string())
            } else {
                parse_expression(
                    "DateTime::parse_from_str",
                    format!("{}Z", naive_round_trip(&dt.naive_utc())),
                    DATE_TIME_ROUND_TRIP_FORMAT,
                )
            }
        }
        Temporal::Offset(dt) => {
            if *dt == DateTime::<Utc>::MIN_UTC {
                LiteralNode::Identifier("DateTime::<Utc>::MIN_UTC".to_string())
            } else if *dt == DateTime::<Utc>::MAX_UTC {
                LiteralNode::Identifier("DateTime::<Utc>::MAX_UTC".to_string())
            } else {
                parse_expression(
                    "DateTime::parse_from_str",
                    format!(
                        "{}{}",
                        naive_round_trip(&dt.naive_local()),
                        dt.format("%:z")
                    ),
                    DATE_TIME_ROUND_TRIP_FORMAT,
                )
            }
        }
        Temporal::Unspecified(ndt) => {
            if *ndt == NaiveDateTime::MIN {
                LiteralNode::Identifier("NaiveDateTime::MIN".to_string())
            } else if *ndt == NaiveDateTime::MAX {
                LiteralNode::Identifier("NaiveDateTime::MAX".to_string())
            } else {
                parse_expression(
                    "NaiveDateTime::parse_from_str",
                    naive_round_trip(ndt),
                    NAIVE_ROUND_TRIP_FORMAT,
                )
            }
        }
    }
}

fn parse_expression(constructor: &str, text: String, format: &str) -> LiteralNode {
    LiteralNode::ParsedExpression {
        constructor: constructor.to_string(),
        args: vec![
            LiteralNode::str_token(str_token(&text)),
            LiteralNode::str_token(str_token(format)),
        ],
    }
}

// Seven fractional digits, matching the original round-trip precision.
fn naive_round_trip(ndt: &NaiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:07}",
        ndt.year(),
        ndt.month(),
        ndt.day(),
        ndt.hour(),
        ndt.minute(),
        ndt.second(),
        ndt.nanosecond() / 100
    )
}

fn span_literal(d: TimeDelta) -> LiteralNode {
    if d == TimeDelta::zero() {
        LiteralNode::Identifier("TimeDelta::zero()".to_string())
    } else if d == TimeDelta::MIN {
        LiteralNode::Identifier("TimeDelta::MIN".to_string())
    } else if d == TimeDelta::MAX {
        LiteralNode::Identifier("TimeDelta::MAX".to_string())
    } else {
        parse_expression("TimeDelta::parse", span_round_trip(d), SPAN_ROUND_TRIP_FORMAT)
    }
}

/// Renders a span as `d.hh:mm:ss.fffffff`, sign preserved.
#[must_use]
pub fn span_round_trip(d: TimeDelta) -> String {
    let negative = d < TimeDelta::zero();
    let abs = if negative { -d } else { d };
    let total_seconds = abs.num_seconds();
    let fraction = abs.subsec_nanos() / 100;
    format!(
        "{}{}.{:02}:{:02}:{:02}.{:07}",
        if negative { "-" } else { "" },
        total_seconds / 86_400,
        (total_seconds / 3_600) % 24,
        (total_seconds / 60) % 60,
        total_seconds % 60,
        fraction
    )
}

fn opaque_literal(o: &Opaque, diagnostics: &mut Vec<Diagnostic>) -> LiteralNode {
    if let Some(repr) = o.repr.as_deref() {
        if expression_like(repr) {
            return LiteralNode::Identifier(repr.trim().to_string());
        }
    }
    log::warn!("`{}` has no literal form; degrading to null", o.type_name);
    diagnostics.push(Diagnostic::Unrepresentable {
        type_name: o.type_name.clone(),
    });
    LiteralNode::Null
}

// Capability check replacing the original's catch-around-parse: the display
// text must plausibly stand alone as an expression.
fn expression_like(s: &str) -> bool {
    let t = s.trim();
    !t.is_empty()
        && !t.contains(char::is_whitespace)
        && t.starts_with(|c: char| c.is_alphabetic() || c == '_')
        && t.chars()
            .all(|c| c.is_alphanumeric() || "_:().\"',-+<>[]".contains(c))
}
