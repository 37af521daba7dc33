//! Stock display styles for game parameters.
//!
//! Rates and chances are stored as fractions (`1.5`, `0.25`) but shown as
//! percentages; integers and powers carry an explicit sign so modifier rows
//! read as bonuses (`+3`, `-10%`).

use std::sync::Arc;

use crate::shape::{Formatter, ShapeKind};
use crate::value::ParamValue;

/// Named formatter usable by shapes and parameter catalogs.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DisplayStyle {
    /// The value's own string form: `1.5`, `true`
    #[default]
    Plain,
    /// `On` / `Off`
    OnOff,
    /// `1.5` → `150%`
    Percentage,
    /// `0.2` → `+20%`, `-0.1` → `-10%`
    SignedPercentage,
    /// `0.8` → `20%`, the share a damage rate removes
    ReductionPercentage,
    /// `0.025` → `2.5%`, for small per-turn values
    DecimalPercentage,
    /// `1.239` → `123%`, for large values where rounding up would overstate
    FlooredPercentage,
    /// `3` → `+3`
    SignedInteger,
}

impl DisplayStyle {
    /// Style a catalog uses when a parameter does not name one.
    pub const fn for_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Boolean => Self::OnOff,
            ShapeKind::Rate | ShapeKind::Chance => Self::Percentage,
            ShapeKind::Integer => Self::SignedInteger,
            ShapeKind::Number | ShapeKind::Parameter => Self::Plain,
        }
    }

    /// Renders `value`, falling back to the plain form when the style does
    /// not apply to it (e.g. `on_off` given a number).
    pub fn format(&self, value: &ParamValue) -> String {
        let formatted = match self {
            Self::Plain => None,
            Self::OnOff => value
                .as_bool()
                .map(|on| if on { "On" } else { "Off" }.to_owned()),
            Self::Percentage => value.as_f64().map(|v| format!("{}%", to_percentage(v))),
            Self::SignedPercentage => value
                .as_f64()
                .map(|v| format!("{}%", signed(to_percentage(v)))),
            Self::ReductionPercentage => value
                .as_f64()
                .map(|v| format!("{}%", 100_i64.saturating_sub(to_percentage(v)))),
            Self::DecimalPercentage => value
                .as_f64()
                .map(|v| format!("{:.1}%", (v * 1000.0).round() / 10.0)),
            Self::FlooredPercentage => value
                .as_f64()
                .map(|v| format!("{}%", (v * 100.0).floor() as i64)),
            Self::SignedInteger => value.as_i64().map(signed),
        };

        formatted.unwrap_or_else(|| value.to_string())
    }

    /// Wraps the style as a shape formatter.
    pub fn formatter(self) -> Formatter {
        Arc::new(move |value: &ParamValue| self.format(value))
    }
}

fn to_percentage(rate: f64) -> i64 {
    (rate * 100.0).round() as i64
}

fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(style: DisplayStyle, value: impl Into<ParamValue>) -> String {
        style.format(&value.into())
    }

    #[test]
    fn percentages() {
        assert_eq!(fmt(DisplayStyle::Percentage, 1.5), "150%");
        assert_eq!(fmt(DisplayStyle::Percentage, 0.25), "25%");
        assert_eq!(fmt(DisplayStyle::Percentage, 1.15), "115%");
        assert_eq!(fmt(DisplayStyle::Percentage, 1), "100%");
    }

    #[test]
    fn signed_percentages() {
        assert_eq!(fmt(DisplayStyle::SignedPercentage, 0.2), "+20%");
        assert_eq!(fmt(DisplayStyle::SignedPercentage, -0.1), "-10%");
        assert_eq!(fmt(DisplayStyle::SignedPercentage, 0.0), "0%");
    }

    #[test]
    fn reduction_and_fine_grained_percentages() {
        assert_eq!(fmt(DisplayStyle::ReductionPercentage, 0.8), "20%");
        assert_eq!(fmt(DisplayStyle::ReductionPercentage, 1.0), "0%");
        assert_eq!(
            fmt(DisplayStyle::ReductionPercentage, -1e30),
            format!("{}%", i64::MAX)
        );
        assert_eq!(fmt(DisplayStyle::DecimalPercentage, 0.025), "2.5%");
        assert_eq!(fmt(DisplayStyle::DecimalPercentage, -0.125), "-12.5%");
        assert_eq!(fmt(DisplayStyle::FlooredPercentage, 1.239), "123%");
    }

    #[test]
    fn signed_integers() {
        assert_eq!(fmt(DisplayStyle::SignedInteger, 3), "+3");
        assert_eq!(fmt(DisplayStyle::SignedInteger, -2), "-2");
        assert_eq!(fmt(DisplayStyle::SignedInteger, 0), "0");
    }

    #[test]
    fn flags_and_fallback() {
        assert_eq!(fmt(DisplayStyle::OnOff, true), "On");
        assert_eq!(fmt(DisplayStyle::OnOff, false), "Off");
        assert_eq!(fmt(DisplayStyle::OnOff, 2), "2");
        assert_eq!(fmt(DisplayStyle::Percentage, "n/a"), "n/a");
        assert_eq!(fmt(DisplayStyle::Plain, 1.5), "1.5");
    }

    #[test]
    fn kind_defaults() {
        assert_eq!(DisplayStyle::for_kind(ShapeKind::Boolean), DisplayStyle::OnOff);
        assert_eq!(DisplayStyle::for_kind(ShapeKind::Chance), DisplayStyle::Percentage);
        assert_eq!(DisplayStyle::for_kind(ShapeKind::Integer), DisplayStyle::SignedInteger);
        assert_eq!(DisplayStyle::for_kind(ShapeKind::Number), DisplayStyle::Plain);
        assert_eq!("signed_percentage".parse::<DisplayStyle>().unwrap(), DisplayStyle::SignedPercentage);
    }
}
