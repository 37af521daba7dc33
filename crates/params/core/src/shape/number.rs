//! Numeric shapes: number, integer, rate and chance.
//!
//! All four share [`NumberBounds`] for validation and clamping and differ only
//! in their defaults and forced bounds:
//!
//! | kind    | default | min    | max    | whole only |
//! |---------|---------|--------|--------|------------|
//! | number  | `0.0`   | option | option | option     |
//! | integer | `0`     | option | option | yes        |
//! | rate    | `1.0`   | `0.0`  | option | option     |
//! | chance  | `0.0`   | `0.0`  | `1.0`  | option     |

use std::sync::Arc;

use super::{Formatter, ParameterShape, ShapeError, ShapeKind, Validator, plain_formatter};
use crate::display::DisplayStyle;
use crate::value::{ParamValue, is_whole};

/// Inclusive numeric range, each side optional.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub integer_only: bool,
}

impl NumberBounds {
    /// No bounds, fractions allowed.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
        integer_only: false,
    };

    /// The range every rate lives in: `[0, ∞)`.
    pub const RATE: Self = Self {
        min: Some(0.0),
        max: None,
        integer_only: false,
    };

    /// The range every chance lives in: `[0, 1]`.
    pub const CHANCE: Self = Self {
        min: Some(0.0),
        max: Some(1.0),
        integer_only: false,
    };

    /// True when `value` is finite and inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && self.in_range(value) && (!self.integer_only || is_whole(value))
    }

    fn in_range(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// Validation rule shared by every numeric shape.
    pub fn accepts(&self, value: &ParamValue) -> bool {
        match value {
            // Whole by construction; only the range applies.
            ParamValue::Integer(v) => self.in_range(*v as f64),
            ParamValue::Number(v) => self.contains(*v),
            _ => false,
        }
    }

    /// Projects `value` into `[min, max]`, leaving unset sides alone.
    pub fn clamp(&self, value: f64) -> f64 {
        let value = self.min.map_or(value, |min| value.max(min));
        self.max.map_or(value, |max| value.min(max))
    }
}

/// Options for the numeric shape factories.
#[derive(Clone, Default)]
pub struct NumberShapeOptions {
    /// `None` means the kind's own default.
    pub default_value: Option<ParamValue>,
    /// Forced to `0.0` by `rate` and `chance`.
    pub min: Option<f64>,
    /// Forced to `1.0` by `chance`.
    pub max: Option<f64>,
    /// Forced on by `integer`.
    pub integer_only: bool,
    pub formatter: Option<Formatter>,
}

impl NumberShapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<ParamValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn integer_only(mut self) -> Self {
        self.integer_only = true;
        self
    }

    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&ParamValue) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: DisplayStyle) -> Self {
        self.formatter = Some(style.formatter());
        self
    }
}

impl ParameterShape {
    /// Any finite number within the optional bounds. Default `0.0`.
    pub fn number(options: NumberShapeOptions) -> Result<Self, ShapeError> {
        Self::numeric(ShapeKind::Number, options, ParamValue::Number(0.0))
    }

    /// Whole numbers only. Default `0`.
    pub fn integer(options: NumberShapeOptions) -> Result<Self, ShapeError> {
        let options = NumberShapeOptions {
            integer_only: true,
            ..options
        };
        Self::numeric(ShapeKind::Integer, options, ParamValue::Integer(0))
    }

    /// Non-negative multiplier. `min` is always `0.0`; default `1.0`.
    pub fn rate(options: NumberShapeOptions) -> Result<Self, ShapeError> {
        let options = NumberShapeOptions {
            min: NumberBounds::RATE.min,
            ..options
        };
        Self::numeric(ShapeKind::Rate, options, ParamValue::Number(1.0))
    }

    /// Probability. Bounds are always `[0.0, 1.0]`; default `0.0`.
    pub fn chance(options: NumberShapeOptions) -> Result<Self, ShapeError> {
        let options = NumberShapeOptions {
            min: NumberBounds::CHANCE.min,
            max: NumberBounds::CHANCE.max,
            ..options
        };
        Self::numeric(ShapeKind::Chance, options, ParamValue::Number(0.0))
    }

    fn numeric(
        kind: ShapeKind,
        options: NumberShapeOptions,
        fallback_default: ParamValue,
    ) -> Result<Self, ShapeError> {
        let bounds = NumberBounds {
            min: options.min,
            max: options.max,
            integer_only: options.integer_only,
        };
        let default_value = options.default_value.unwrap_or(fallback_default);
        let validator: Validator = Arc::new(move |value: &ParamValue| bounds.accepts(value));
        let formatter = options.formatter.unwrap_or_else(plain_formatter);

        Self::build(kind, default_value, validator, formatter, Some(bounds))
    }
}
