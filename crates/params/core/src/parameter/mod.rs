//! Parameter slots and the hosts that own them.
//!
//! A [`Parameter`] is one named value plus the shape that governs it. Slots are
//! grouped in a [`ParameterSet`], and any type embedding a set becomes a
//! [`ParameterHost`] by implementing two accessors.
//!
//! Every slot exposes the same five operations:
//!
//! | operation | slot method | host method      |
//! |-----------|-------------|------------------|
//! | raw read  | `raw`       | `raw_value`      |
//! | read      | `get`       | `value`          |
//! | write     | `set`       | `set_value`      |
//! | validate  | `validate`  | `validate_value` |
//! | display   | `display`   | `display_value`  |
//!
//! `value` is the override point for composite hosts; `raw_value` always
//! returns the stored slot.

pub mod host;
pub mod set;

use std::sync::Arc;

use crate::error::{ErrorSeverity, ParamsError};
use crate::shape::ParameterShape;
use crate::value::ParamValue;

pub use host::{ParameterHost, compose_value};
pub use set::ParameterSet;

/// Errors raised when reading or writing parameter slots.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("`{value}` is invalid for parameter `{name}`")]
    InvalidValue { name: String, value: ParamValue },

    #[error("parameter `{name}` is not defined")]
    UnknownParameter { name: String },
}

impl ParamsError for ParameterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidValue { .. } => ErrorSeverity::Validation,
            Self::UnknownParameter { .. } => ErrorSeverity::Configuration,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => "invalid_value",
            Self::UnknownParameter { .. } => "unknown_parameter",
        }
    }
}

/// A named scalar slot validated by its shape.
///
/// # Example
/// ```
/// # use params_core::parameter::Parameter;
/// # use params_core::shape::{ParameterShape, NumberShapeOptions};
/// let shape = ParameterShape::number(NumberShapeOptions::new().with_min(0.0)).unwrap();
/// let mut money = Parameter::new("money", shape).unwrap();
/// money.set(10).unwrap();
/// assert!(money.set(-1).is_err());
/// assert_eq!(money.get().as_i64(), Some(10));
/// ```
#[derive(Clone, Debug)]
pub struct Parameter {
    name: String,
    shape: Arc<ParameterShape>,
    value: ParamValue,
}

impl Parameter {
    /// Creates the slot and writes the shape's default through the setter.
    pub fn new(
        name: impl Into<String>,
        shape: impl Into<Arc<ParameterShape>>,
    ) -> Result<Self, ParameterError> {
        let mut parameter = Self {
            name: name.into(),
            shape: shape.into(),
            value: ParamValue::Empty,
        };
        parameter.reset()?;
        Ok(parameter)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &Arc<ParameterShape> {
        &self.shape
    }

    /// The stored value, unmodified.
    pub fn raw(&self) -> &ParamValue {
        &self.value
    }

    /// The public read. A bare slot has nothing to fold in, so this is `raw`.
    pub fn get(&self) -> &ParamValue {
        self.raw()
    }

    /// Validates and stores `value`. On rejection the slot keeps its old value.
    pub fn set(&mut self, value: impl Into<ParamValue>) -> Result<(), ParameterError> {
        let value = value.into();
        if !self.shape.validate_value(&value) {
            tracing::debug!(parameter = %self.name, %value, "rejected parameter write");
            return Err(ParameterError::InvalidValue {
                name: self.name.clone(),
                value,
            });
        }

        self.value = value;
        Ok(())
    }

    pub fn validate(&self, value: &ParamValue) -> bool {
        self.shape.validate_value(value)
    }

    /// Formats the public value with the shape's formatter.
    pub fn display(&self) -> String {
        self.shape.display_value(self.get())
    }

    /// Restores the shape's default value.
    pub fn reset(&mut self) -> Result<(), ParameterError> {
        let default_value = self.shape.default_value().clone();
        self.set(default_value)
    }

    /// True while the slot holds its shape's default.
    pub fn is_default(&self) -> bool {
        self.value.loosely_eq(self.shape.default_value())
    }
}
