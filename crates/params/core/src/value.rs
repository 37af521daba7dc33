//! Scalar values stored in parameter slots.

use core::fmt;

/// Upper bound (exclusive) of the `i64` range as an `f64`, i.e. 2^63.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// A single scalar held by a parameter slot or passed to an aggregator.
///
/// `Integer` and `Number` are the numeric variants. Everything else is
/// rejected by numeric shapes; `Text` may still be coerced by aggregators
/// when it spells a number.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    /// No value. Default of the generic shape.
    #[default]
    Empty,
}

impl ParamValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True for `Integer` and `Number`, regardless of finiteness.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Number(_))
    }

    /// Numeric view of the value. Booleans and text are not numbers here.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer view of the value; whole `Number`s inside the `i64` range count.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Number(v) if is_whole(*v) => Some(*v as i64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Lenient numeric conversion used by aggregators.
    ///
    /// Accepts numeric variants and text that parses as an `f64` after
    /// trimming. The result may still be NaN or infinite.
    pub fn coerce_f64(&self) -> Option<f64> {
        match self {
            Self::Text(v) => v.trim().parse::<f64>().ok(),
            other => other.as_f64(),
        }
    }

    /// Compares values the way a player would: `Integer(5)` equals `Number(5.0)`.
    pub fn loosely_eq(&self, other: &ParamValue) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }
}

/// True when `value` is finite, has no fractional part and fits in an `i64`.
pub(crate) fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value >= -I64_UPPER && value < I64_UPPER
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Empty => f.write_str("-"),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&ParamValue> for ParamValue {
    fn from(value: &ParamValue) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_views() {
        assert_eq!(ParamValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(ParamValue::Number(2.0).as_i64(), Some(2));
        assert_eq!(ParamValue::Number(2.5).as_i64(), None);
        assert_eq!(ParamValue::Number(f64::NAN).as_i64(), None);
        assert_eq!(ParamValue::Boolean(true).as_f64(), None);
        assert!(!ParamValue::Text("1".into()).is_numeric());
    }

    #[test]
    fn coercion_parses_numeric_text_only() {
        assert_eq!(ParamValue::from(" 1.5 ").coerce_f64(), Some(1.5));
        assert_eq!(ParamValue::from("not_a_number").coerce_f64(), None);
        assert_eq!(ParamValue::Boolean(true).coerce_f64(), None);
        assert_eq!(ParamValue::Empty.coerce_f64(), None);
    }

    #[test]
    fn display_matches_plain_string_conversion() {
        assert_eq!(ParamValue::Number(1.0).to_string(), "1");
        assert_eq!(ParamValue::Number(0.25).to_string(), "0.25");
        assert_eq!(ParamValue::Integer(-4).to_string(), "-4");
        assert_eq!(ParamValue::Boolean(false).to_string(), "false");
        assert_eq!(ParamValue::Empty.to_string(), "-");
    }

    #[test]
    fn loose_equality_bridges_integer_and_number() {
        assert!(ParamValue::Integer(5).loosely_eq(&ParamValue::Number(5.0)));
        assert!(!ParamValue::Integer(5).loosely_eq(&ParamValue::Number(5.5)));
        assert!(ParamValue::Boolean(true).loosely_eq(&ParamValue::Boolean(true)));
        assert!(!ParamValue::Boolean(true).loosely_eq(&ParamValue::Integer(1)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn untagged_json_round_trip() {
        let values: Vec<ParamValue> = serde_json::from_str(r#"[5, 1.5, true, "x", null]"#).unwrap();
        assert_eq!(
            values,
            vec![
                ParamValue::Integer(5),
                ParamValue::Number(1.5),
                ParamValue::Boolean(true),
                ParamValue::Text("x".into()),
                ParamValue::Empty,
            ]
        );
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[5,1.5,true,"x",null]"#);
    }
}
