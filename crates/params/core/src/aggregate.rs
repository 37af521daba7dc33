//! Aggregators: fold a base value and its modifiers into one effective value.
//!
//! Each parameter kind composes according to what it measures:
//!
//! | kind    | rule                     | identity |
//! |---------|--------------------------|----------|
//! | number  | `Σ vᵢ`                   | `0.0`    |
//! | integer | `Σ vᵢ` (whole numbers)   | `0`      |
//! | rate    | `max(Π vᵢ, 0)`           | `1.0`    |
//! | chance  | `1 - Π (1 - vᵢ)`         | `0.0`    |
//! | boolean | `∨ vᵢ`                   | `false`  |
//!
//! Flat bonuses add. Multipliers compose, so two ×1.5 buffs give ×2.25, not
//! ×2.0. Independent chances combine as "at least one triggers", which can
//! never exceed 100%.
//!
//! Every aggregator is all-or-nothing: the first operand (in input order)
//! outside the kind's domain aborts the fold and is reported with its index.

use crate::error::{ErrorSeverity, ParamsError};
use crate::shape::ShapeKind;
use crate::value::{ParamValue, is_whole};

/// Why an operand was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandFault {
    #[strum(to_string = "is not a number")]
    NotNumeric,
    #[strum(to_string = "is not finite")]
    NotFinite,
    #[strum(to_string = "is not a whole number")]
    NotWhole,
    #[strum(to_string = "overflows the integer range")]
    Overflow,
    #[strum(to_string = "is negative")]
    Negative,
    #[strum(to_string = "is outside [0, 1]")]
    OutOfUnitRange,
    #[strum(to_string = "is not a boolean")]
    NotBoolean,
}

/// Errors raised while aggregating.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AggregateError {
    #[error("{kind} operand #{index} `{value}` {fault}")]
    InvalidOperand {
        kind: ShapeKind,
        index: usize,
        value: ParamValue,
        fault: OperandFault,
    },

    #[error("{kind} parameters have no aggregation rule")]
    Unsupported { kind: ShapeKind },
}

impl ParamsError for AggregateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidOperand { .. } => ErrorSeverity::Validation,
            Self::Unsupported { .. } => ErrorSeverity::Configuration,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidOperand { .. } => "invalid_operand",
            Self::Unsupported { .. } => "unsupported_aggregation",
        }
    }
}

/// Sum of all values. Empty input yields `0.0`.
///
/// # Example
/// ```
/// # use params_core::aggregate::aggregate_numbers;
/// assert_eq!(aggregate_numbers([0.4, 0.5]).unwrap(), 0.9);
/// ```
pub fn aggregate_numbers<I>(values: I) -> Result<f64, AggregateError>
where
    I: IntoIterator,
    I::Item: Into<ParamValue>,
{
    values
        .into_iter()
        .enumerate()
        .try_fold(0.0, |sum, (index, value)| {
            let v = finite_operand(ShapeKind::Number, index, value.into())?;
            Ok(sum + v)
        })
}

/// Sum of whole-number values. Empty input yields `0`.
pub fn aggregate_integers<I>(values: I) -> Result<i64, AggregateError>
where
    I: IntoIterator,
    I::Item: Into<ParamValue>,
{
    values
        .into_iter()
        .enumerate()
        .try_fold(0_i64, |sum, (index, value)| {
            let value: ParamValue = value.into();
            let v = whole_operand(index, &value)?;
            sum.checked_add(v)
                .ok_or_else(|| invalid(ShapeKind::Integer, index, value, OperandFault::Overflow))
        })
}

/// Product of non-negative multipliers, floored at `0.0`. Empty input yields `1.0`.
///
/// # Example
/// ```
/// # use params_core::aggregate::aggregate_rates;
/// assert_eq!(aggregate_rates([0.4, 0.5]).unwrap(), 0.2);
/// assert!(aggregate_rates([2.0, -0.01]).is_err());
/// ```
pub fn aggregate_rates<I>(values: I) -> Result<f64, AggregateError>
where
    I: IntoIterator,
    I::Item: Into<ParamValue>,
{
    let product = values
        .into_iter()
        .enumerate()
        .try_fold(1.0, |product, (index, value)| -> Result<f64, AggregateError> {
            let value: ParamValue = value.into();
            let v = finite_operand(ShapeKind::Rate, index, value.clone())?;
            if v < 0.0 {
                return Err(invalid(ShapeKind::Rate, index, value, OperandFault::Negative));
            }
            Ok(product * v)
        })?;

    Ok(product.max(0.0))
}

/// Chance that at least one independent event triggers. Empty input yields `0.0`.
///
/// # Example
/// ```
/// # use params_core::aggregate::aggregate_chances;
/// // 1 - (1 - 0.2) × (1 - 0.3) = 1 - 0.56
/// let combined = aggregate_chances([0.2, 0.3]).unwrap();
/// assert!((combined - 0.44).abs() < 1e-9);
/// ```
pub fn aggregate_chances<I>(values: I) -> Result<f64, AggregateError>
where
    I: IntoIterator,
    I::Item: Into<ParamValue>,
{
    let miss = values
        .into_iter()
        .enumerate()
        .try_fold(1.0, |miss, (index, value)| -> Result<f64, AggregateError> {
            let value: ParamValue = value.into();
            let v = finite_operand(ShapeKind::Chance, index, value.clone())?;
            if !(0.0..=1.0).contains(&v) {
                return Err(invalid(
                    ShapeKind::Chance,
                    index,
                    value,
                    OperandFault::OutOfUnitRange,
                ));
            }
            Ok(miss * (1.0 - v))
        })?;

    Ok(1.0 - miss)
}

/// True when any flag is set. Empty input yields `false`.
pub fn aggregate_flags<I>(values: I) -> Result<bool, AggregateError>
where
    I: IntoIterator,
    I::Item: Into<ParamValue>,
{
    values
        .into_iter()
        .enumerate()
        .try_fold(false, |any, (index, value)| {
            let value: ParamValue = value.into();
            match value.as_bool() {
                Some(v) => Ok(any || v),
                None => Err(invalid(
                    ShapeKind::Boolean,
                    index,
                    value,
                    OperandFault::NotBoolean,
                )),
            }
        })
}

/// Folds `values` with the rule of `kind`.
///
/// The generic `Parameter` kind carries no rule and fails with
/// [`AggregateError::Unsupported`].
pub fn aggregate_by_kind<I>(kind: ShapeKind, values: I) -> Result<ParamValue, AggregateError>
where
    I: IntoIterator,
    I::Item: Into<ParamValue>,
{
    match kind {
        ShapeKind::Number => aggregate_numbers(values).map(ParamValue::Number),
        ShapeKind::Integer => aggregate_integers(values).map(ParamValue::Integer),
        ShapeKind::Rate => aggregate_rates(values).map(ParamValue::Number),
        ShapeKind::Chance => aggregate_chances(values).map(ParamValue::Number),
        ShapeKind::Boolean => aggregate_flags(values).map(ParamValue::Boolean),
        ShapeKind::Parameter => Err(AggregateError::Unsupported { kind }),
    }
}

fn invalid(kind: ShapeKind, index: usize, value: ParamValue, fault: OperandFault) -> AggregateError {
    tracing::trace!(%kind, index, %value, %fault, "rejected aggregation operand");
    AggregateError::InvalidOperand {
        kind,
        index,
        value,
        fault,
    }
}

fn finite_operand(kind: ShapeKind, index: usize, value: ParamValue) -> Result<f64, AggregateError> {
    match value.coerce_f64() {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(invalid(kind, index, value, OperandFault::NotFinite)),
        None => Err(invalid(kind, index, value, OperandFault::NotNumeric)),
    }
}

fn whole_operand(index: usize, value: &ParamValue) -> Result<i64, AggregateError> {
    if let ParamValue::Integer(v) = value {
        return Ok(*v);
    }

    let v = finite_operand(ShapeKind::Integer, index, value.clone())?;
    if is_whole(v) {
        return Ok(v as i64);
    }

    let fault = if v.fract() == 0.0 {
        OperandFault::Overflow
    } else {
        OperandFault::NotWhole
    };
    Err(invalid(ShapeKind::Integer, index, value.clone(), fault))
}
