//! Tagged runtime values accepted by the classifier.
//!
//! [`Value`] carries whatever a loosely typed caller holds. Conversions keep
//! booleans distinct from integers so that `true` never turns into `1` before
//! classification sees it.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value as JsonValue};

/// A dynamically typed input value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean.
    Boolean(bool),
    /// An integer. Wide enough to hold every `i64` and `u64`.
    Integer(i128),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Text(String),
    /// An absent value.
    Null,
    /// An ordered sequence of values.
    Sequence(Vec<Value>),
    /// Key/value entries in insertion order.
    Mapping(Vec<(String, Value)>),
}

impl Value {
    /// Returns the runtime kind of the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use primality::{Value, ValueKind};
    ///
    /// assert_eq!(Value::from(3).kind(), ValueKind::Integer);
    /// assert_eq!(Value::from(false).kind(), ValueKind::Boolean);
    /// assert_eq!(Value::from("tres").kind(), ValueKind::Text);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Null => ValueKind::Null,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
        }
    }

    /// Parses a JSON literal into a value.
    ///
    /// Input that is not valid JSON is kept verbatim as [`Value::Text`], so
    /// bare words such as `tres` become strings rather than parse failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use primality::Value;
    ///
    /// assert_eq!(Value::parse_literal("5"), Value::Integer(5));
    /// assert_eq!(Value::parse_literal("7.0"), Value::Float(7.0));
    /// assert_eq!(Value::parse_literal("true"), Value::Boolean(true));
    /// assert_eq!(Value::parse_literal("\"tres\""), Value::Text("tres".to_owned()));
    /// assert_eq!(Value::parse_literal("tres"), Value::Text("tres".to_owned()));
    /// assert_eq!(Value::parse_literal("[]"), Value::Sequence(Vec::new()));
    /// ```
    #[must_use]
    pub fn parse_literal(raw: &str) -> Self {
        serde_json::from_str::<JsonValue>(raw.trim())
            .map_or_else(|_| Self::Text(raw.to_owned()), Self::from)
    }

    fn from_json_number(number: &Number) -> Self {
        if let Some(signed) = number.as_i64() {
            return Self::Integer(i128::from(signed));
        }
        if let Some(unsigned) = number.as_u64() {
            return Self::Integer(i128::from(unsigned));
        }
        Self::Float(number.as_f64().unwrap_or(f64::NAN))
    }
}

/// Runtime kind of a [`Value`], used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A boolean.
    Boolean,
    /// An integer.
    Integer,
    /// A floating-point number.
    Float,
    /// A string.
    Text,
    /// An absent value.
    Null,
    /// A sequence.
    Sequence,
    /// A mapping.
    Mapping,
}

impl ValueKind {
    /// Returns the short diagnostic name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Integer => "int",
            Self::Float => "float",
            Self::Text => "str",
            Self::Null => "null",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! integer_from {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_from!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(flag) => Self::Boolean(flag),
            JsonValue::Number(number) => Self::from_json_number(&number),
            JsonValue::String(text) => Self::Text(text),
            JsonValue::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(entries) => Self::Mapping(
                entries
                    .into_iter()
                    .map(|(key, entry)| (key, Self::from(entry)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonValue::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    //! Covers literal parsing and conversions into `Value`.

    use rstest::rstest;
    use serde::Deserialize;

    use super::*;

    #[rstest]
    #[case("5", Value::Integer(5))]
    #[case("-1000003", Value::Integer(-1_000_003))]
    #[case("18446744073709551615", Value::Integer(i128::from(u64::MAX)))]
    #[case("7.0", Value::Float(7.0))]
    #[case("19.000000000000004", Value::Float(19.000_000_000_000_004))]
    #[case("false", Value::Boolean(false))]
    #[case("null", Value::Null)]
    #[case("\"cinco\"", Value::Text("cinco".to_owned()))]
    #[case("cinco", Value::Text("cinco".to_owned()))]
    #[case(" 11 ", Value::Integer(11))]
    #[case("[]", Value::Sequence(Vec::new()))]
    #[case("[1, 2]", Value::Sequence(vec![Value::Integer(1), Value::Integer(2)]))]
    #[case("{}", Value::Mapping(Vec::new()))]
    fn parse_literal_maps_json_shapes(#[case] raw: &str, #[case] expected: Value) {
        assert_eq!(Value::parse_literal(raw), expected);
    }

    #[test]
    fn parse_literal_keeps_unparseable_text_verbatim() {
        assert_eq!(
            Value::parse_literal(" not json "),
            Value::Text(" not json ".to_owned())
        );
    }

    #[test]
    fn integers_beyond_u64_arrive_as_floats() {
        let value = Value::parse_literal("18446744073709551616");
        assert_eq!(value.kind(), ValueKind::Float);
    }

    #[rstest]
    #[case(Value::from(true), ValueKind::Boolean)]
    #[case(Value::from(7_u8), ValueKind::Integer)]
    #[case(Value::from(-7_i64), ValueKind::Integer)]
    #[case(Value::from(u64::MAX), ValueKind::Integer)]
    #[case(Value::from(2.5_f32), ValueKind::Float)]
    #[case(Value::from(2.5_f64), ValueKind::Float)]
    #[case(Value::from("tres"), ValueKind::Text)]
    #[case(Value::from(String::from("tres")), ValueKind::Text)]
    #[case(Value::from(None::<i32>), ValueKind::Null)]
    #[case(Value::from(Some(3)), ValueKind::Integer)]
    #[case(Value::from(Vec::<Value>::new()), ValueKind::Sequence)]
    fn conversions_preserve_runtime_kind(#[case] value: Value, #[case] expected: ValueKind) {
        assert_eq!(value.kind(), expected);
    }

    #[test]
    fn booleans_are_not_widened_to_integers() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_ne!(Value::from(true), Value::Integer(1));
    }

    #[derive(Debug, Deserialize)]
    struct Request {
        value: Value,
    }

    #[test]
    fn deserializes_from_embedded_payload() {
        let request: Request =
            serde_json::from_str(r#"{"value": 8.0}"#).expect("payload should deserialize");
        assert_eq!(request.value, Value::Float(8.0));
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(ValueKind::Integer.to_string(), "int");
        assert_eq!(ValueKind::Boolean.name(), "bool");
    }
}
