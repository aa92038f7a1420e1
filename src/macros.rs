/// Builds a [`Value`](crate::Value) graph from literal syntax.
///
/// Arrays become sequences, `Type { "name": value }` blocks become named
/// objects, and any other expression converts through `Into<Value>`, so
/// already-built values and object handles compose (wrap them in parentheses
/// where a bare expression would be ambiguous). Serde types go through
/// [`to_value`](crate::to_value) first.
///
/// # Examples
///
/// ```rust
/// use litdump::{dump_value, graph};
///
/// let person = graph!(Person {
///     "name": "Alice",
///     "age": 30,
/// });
/// let out = dump_value(&person);
/// assert_eq!(out.text, "let person = Person { name: \"Alice\", age: 30 };");
/// ```
#[macro_export]
macro_rules! graph {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty sequence
    ([]) => {
        $crate::Value::seq(::std::vec::Vec::<$crate::Value>::new())
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::seq(vec![$($crate::graph!($elem)),*])
    };

    // Handle empty object
    ($t:ident {}) => {
        $crate::Value::Object($crate::Obj::new(stringify!($t)).build())
    };

    // Handle non-empty object
    ($t:ident { $($key:literal : $value:tt),* $(,)? }) => {{
        let mut builder = $crate::Obj::new(stringify!($t));
        $(
            builder = builder.prop($key, $crate::graph!($value));
        )*
        $crate::Value::Object(builder.build())
    }};

    // Fallback for any expression convertible into a value
    ($e:expr) => {
        $crate::Value::from($e)
    };
}
