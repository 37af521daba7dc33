//! Common error infrastructure for params-core.
//!
//! Domain-specific errors live next to the operations that raise them:
//! - [`ShapeError`](crate::shape::ShapeError) when a shape is constructed
//! - [`ParameterError`](crate::parameter::ParameterError) when a slot is read or written
//! - [`AggregateError`](crate::aggregate::AggregateError) when modifiers are folded
//!
//! This module provides the trait they all share and the crate-level [`Error`]
//! that unifies them for callers mixing several operations.

use crate::aggregate::AggregateError;
use crate::parameter::ParameterError;
use crate::shape::ShapeError;

/// Severity level of an error, used to decide who has to fix it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// A value supplied at runtime was rejected; the operation had no effect.
    ///
    /// Examples: writing `-1` into a rate slot, aggregating a `1.01` chance
    Validation,

    /// The parameter setup itself is wrong and will keep failing until the
    /// definition changes.
    ///
    /// Examples: a shape default outside its own bounds, an undefined name
    Configuration,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Configuration => "configuration",
        }
    }

    /// Returns true if this error points at a broken definition.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration)
    }
}

/// Common trait for all params-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Carry the offending value so messages name it
/// - Keep `error_code` stable; callers match on it in logs and tests
pub trait ParamsError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static snake_case identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Any error raised by params-core.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

impl ParamsError for Error {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Shape(e) => e.severity(),
            Self::Parameter(e) => e.severity(),
            Self::Aggregate(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Shape(e) => e.error_code(),
            Self::Parameter(e) => e.error_code(),
            Self::Aggregate(e) => e.error_code(),
        }
    }
}

/// Result alias for operations that may raise any params-core error.
pub type Result<T> = core::result::Result<T, Error>;
