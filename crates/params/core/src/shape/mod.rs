//! Parameter shapes - immutable descriptors of a scalar slot.
//!
//! A shape owns everything about a parameter except its current value:
//!
//! ```text
//! kind ─┬─ default value   (validated once, at construction)
//!       ├─ validator       (pure predicate, re-run on every write)
//!       ├─ formatter       (pure, used by display)
//!       └─ bounds          (numeric kinds only: min / max / integer-only)
//! ```
//!
//! Shapes are independent of any host. The same `Arc<ParameterShape>` can back
//! slots on many objects; each slot still owns its own value.

pub mod kind;
pub mod number;

use std::sync::Arc;

use crate::display::DisplayStyle;
use crate::error::{ErrorSeverity, ParamsError};
use crate::value::ParamValue;

pub use kind::ShapeKind;
pub use number::{NumberBounds, NumberShapeOptions};

/// Pure predicate deciding whether a value may be stored.
pub type Validator = Arc<dyn Fn(&ParamValue) -> bool + Send + Sync>;

/// Pure function rendering a value for display.
pub type Formatter = Arc<dyn Fn(&ParamValue) -> String + Send + Sync>;

/// Errors raised while building a shape.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("default value `{value}` is invalid for a {kind} shape")]
    InvalidDefault { kind: ShapeKind, value: ParamValue },
}

impl ParamsError for ShapeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Configuration
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDefault { .. } => "invalid_default",
        }
    }
}

/// Options for [`ParameterShape::generic`] and [`ParameterShape::boolean`].
#[derive(Clone, Default)]
pub struct ShapeOptions {
    /// Shape tag reported by the generic shape. Ignored by `boolean`.
    pub kind: ShapeKind,
    /// `None` means the kind's own default.
    pub default_value: Option<ParamValue>,
    /// `None` accepts everything. Ignored by `boolean`.
    pub validator: Option<Validator>,
    /// `None` renders the value's plain string form.
    pub formatter: Option<Formatter>,
}

impl ShapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<ParamValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&ParamValue) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
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

/// Immutable description of a parameter's default, validity rule and format.
///
/// Construct through the kind-specific factories; each one validates the
/// default value before returning, so `validate_value(default_value())` holds
/// for every shape that exists.
///
/// # Example
/// ```
/// # use params_core::shape::{ParameterShape, NumberShapeOptions};
/// let shape = ParameterShape::number(NumberShapeOptions::new().with_min(0.0).with_max(10.0)).unwrap();
/// assert!(shape.validate_value(&5.0.into()));
/// assert!(!shape.validate_value(&11.0.into()));
/// assert_eq!(shape.clamp_value(11.0), Some(10.0));
/// ```
#[derive(Clone)]
pub struct ParameterShape {
    kind: ShapeKind,
    default_value: ParamValue,
    validator: Validator,
    formatter: Formatter,
    bounds: Option<NumberBounds>,
}

impl ParameterShape {
    /// Builds an untyped shape from caller-supplied rules.
    ///
    /// An absent default becomes [`ParamValue::Empty`], which is not checked
    /// here; the slot initialization will still run it through the validator.
    pub fn generic(options: ShapeOptions) -> Result<Self, ShapeError> {
        let ShapeOptions {
            kind,
            default_value,
            validator,
            formatter,
        } = options;

        let validator = validator.unwrap_or_else(accept_all);
        let formatter = formatter.unwrap_or_else(plain_formatter);

        match default_value {
            Some(value) if !value.is_empty() => Self::build(kind, value, validator, formatter, None),
            _ => Ok(Self {
                kind,
                default_value: ParamValue::Empty,
                validator,
                formatter,
                bounds: None,
            }),
        }
    }

    /// Builds a flag shape accepting exactly `true` and `false`.
    ///
    /// Default is `false`. The options' kind and validator are not used.
    pub fn boolean(options: ShapeOptions) -> Result<Self, ShapeError> {
        let default_value = options
            .default_value
            .unwrap_or(ParamValue::Boolean(false));
        let validator: Validator = Arc::new(|value: &ParamValue| value.as_bool().is_some());
        let formatter = options.formatter.unwrap_or_else(plain_formatter);

        Self::build(ShapeKind::Boolean, default_value, validator, formatter, None)
    }

    /// Validates the default against the rules, then freezes the shape.
    pub(crate) fn build(
        kind: ShapeKind,
        default_value: ParamValue,
        validator: Validator,
        formatter: Formatter,
        bounds: Option<NumberBounds>,
    ) -> Result<Self, ShapeError> {
        if !validator(&default_value) {
            return Err(ShapeError::InvalidDefault {
                kind,
                value: default_value,
            });
        }

        Ok(Self {
            kind,
            default_value,
            validator,
            formatter,
            bounds,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn default_value(&self) -> &ParamValue {
        &self.default_value
    }

    /// Runs the shape's predicate. No side effects.
    pub fn validate_value(&self, value: &ParamValue) -> bool {
        (self.validator)(value)
    }

    /// Renders a value with the shape's formatter. No side effects.
    pub fn display_value(&self, value: &ParamValue) -> String {
        (self.formatter)(value)
    }

    /// Numeric bounds, present for number, integer, rate and chance shapes.
    pub fn bounds(&self) -> Option<&NumberBounds> {
        self.bounds.as_ref()
    }

    pub fn min(&self) -> Option<f64> {
        self.bounds.and_then(|b| b.min)
    }

    pub fn max(&self) -> Option<f64> {
        self.bounds.and_then(|b| b.max)
    }

    /// Projects `value` into `[min, max]`.
    ///
    /// Returns `None` for non-numeric shapes.
    pub fn clamp_value(&self, value: f64) -> Option<f64> {
        self.bounds.map(|b| b.clamp(value))
    }
}

impl core::fmt::Debug for ParameterShape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParameterShape")
            .field("kind", &self.kind)
            .field("default_value", &self.default_value)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

fn accept_all() -> Validator {
    Arc::new(|_: &ParamValue| true)
}

pub(crate) fn plain_formatter() -> Formatter {
    Arc::new(|value: &ParamValue| value.to_string())
}
