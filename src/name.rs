//! Variable-name derivation: turns a value's type display name into the
//! identifier bound on the left-hand side of the emitted declaration.
//!
//! The scheme is intentionally mechanical so the same input always yields the
//! same name. A null value gets the fallback `x`; a generic with a single
//! type argument folds the argument into the name (`Vec<Person>` becomes
//! `vecOfPersons`); generics too complex to fold keep just their base name.

use crate::value::Value;

/// Derives the binding identifier for a value.
///
/// # Examples
///
/// ```rust
/// use litdump::{name::variable_name, Value};
///
/// assert_eq!(variable_name(&Value::Null), "x");
/// assert_eq!(variable_name(&Value::from("hi")), "string");
/// assert_eq!(
///     variable_name(&Value::seq_of("Person", Vec::<Value>::new())),
///     "vecOfPersons"
/// );
/// ```
#[must_use]
pub fn variable_name(value: &Value) -> String {
    if value.is_null() {
        return "x".to_string();
    }
    from_type_name(&value.type_display())
}

/// Derives an identifier from a type display name.
#[must_use]
pub fn from_type_name(type_name: &str) -> String {
    let name = if type_name.matches('<').count() > 1 || type_name.contains(',') {
        // Nested or multi-argument generics are not folded; keep the base.
        type_name
            .split('<')
            .next()
            .unwrap_or(type_name)
            .to_string()
    } else {
        type_name
            .replace("Option<", "OfNullable")
            .replace('<', "Of")
            .replace('>', "s")
            .replace(' ', "")
            .replace('[', "Array")
            .replace(']', "")
    };
    let name = lower_first(&name);
    if name.is_empty() {
        "x".to_string()
    } else {
        name
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Obj;

    #[test]
    fn null_falls_back_to_x() {
        assert_eq!(variable_name(&Value::Null), "x");
    }

    #[test]
    fn plain_types_lowercase_the_first_letter() {
        assert_eq!(from_type_name("Person"), "person");
        assert_eq!(from_type_name("String"), "string");
        assert_eq!(from_type_name("Guid"), "guid");
        assert_eq!(from_type_name("i32"), "i32");
    }

    #[test]
    fn single_argument_generics_fold_and_pluralize() {
        assert_eq!(from_type_name("Vec<Person>"), "vecOfPersons");
        assert_eq!(from_type_name("Vec<String>"), "vecOfStrings");
    }

    #[test]
    fn nullable_wrappers_fold_with_of_nullable() {
        assert_eq!(from_type_name("Option<Person>"), "ofNullablePersons");
    }

    #[test]
    fn complex_generics_keep_the_base_name() {
        assert_eq!(from_type_name("HashMap<String, i32>"), "hashMap");
        assert_eq!(from_type_name("Vec<Vec<i32>>"), "vec");
    }

    #[test]
    fn array_brackets_are_spelled_out() {
        assert_eq!(from_type_name("Person[]"), "personArray");
    }

    #[test]
    fn object_values_use_their_declared_type() {
        let obj = Obj::new("Organization").prop("name", "dev").build();
        assert_eq!(variable_name(&Value::Object(obj)), "organization");
    }
}
