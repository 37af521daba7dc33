/// Shape tag: which family of scalar a parameter holds.
///
/// The tag selects the default value, the validation rule and the aggregation
/// rule used when a composite folds modifiers for this parameter.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ShapeKind {
    /// Untyped slot with a caller-supplied validator
    #[default]
    Parameter,
    /// Any finite number, optionally bounded
    Number,
    /// Whole number, optionally bounded
    Integer,
    /// Non-negative multiplier (1.0 = no change)
    Rate,
    /// Probability in [0, 1]
    Chance,
    /// On/off flag
    Boolean,
}

impl ShapeKind {
    /// Returns true for kinds backed by [`NumberBounds`](super::NumberBounds).
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Number | Self::Integer | Self::Rate | Self::Chance
        )
    }
}
