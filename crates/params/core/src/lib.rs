//! Game parameters: validated scalar slots and modifier aggregation.
//!
//! `params-core` defines how a game stat is described ([`ParameterShape`]),
//! stored ([`Parameter`], [`ParameterSet`]), exposed on an object
//! ([`ParameterHost`]) and combined with the modifiers granted by skills,
//! equipment and buffs ([`aggregate`]). Everything here is synchronous and
//! free of I/O; data-driven definitions live in `params-content`.
pub mod aggregate;
pub mod display;
pub mod error;
pub mod parameter;
pub mod shape;
pub mod value;

pub use aggregate::{
    AggregateError, OperandFault, aggregate_by_kind, aggregate_chances, aggregate_flags,
    aggregate_integers, aggregate_numbers, aggregate_rates,
};
pub use display::DisplayStyle;
pub use error::{Error, ErrorSeverity, ParamsError, Result};
pub use parameter::{Parameter, ParameterError, ParameterHost, ParameterSet, compose_value};
pub use shape::{
    Formatter, NumberBounds, NumberShapeOptions, ParameterShape, ShapeError, ShapeKind,
    ShapeOptions, Validator,
};
pub use value::ParamValue;
