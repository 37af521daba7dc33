//! Declarative parameter definitions.

use params_core::{
    DisplayStyle, NumberShapeOptions, ParamValue, ParameterSet, ParameterShape, ShapeError,
    ShapeKind, ShapeOptions,
};

/// One parameter as written in a catalog file.
///
/// Only `name` and `kind` are required. Bounds apply to numeric kinds and are
/// overridden where the kind forces them (rate floor, chance range).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSpec {
    pub name: String,
    pub kind: ShapeKind,
    /// Human-readable name for summaries. Falls back to `name`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default: Option<ParamValue>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max: Option<f64>,
    /// Falls back to [`DisplayStyle::for_kind`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub display: Option<DisplayStyle>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            default: None,
            min: None,
            max: None,
            display: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<ParamValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_display(mut self, style: DisplayStyle) -> Self {
        self.display = Some(style);
        self
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn display_style(&self) -> DisplayStyle {
        self.display.unwrap_or(DisplayStyle::for_kind(self.kind))
    }

    /// Builds the shape this spec describes.
    pub fn to_shape(&self) -> Result<ParameterShape, ShapeError> {
        let formatter = Some(self.display_style().formatter());

        if self.kind.is_numeric() {
            let options = NumberShapeOptions {
                default_value: self.default.clone(),
                min: self.min,
                max: self.max,
                integer_only: false,
                formatter,
            };
            return match self.kind {
                ShapeKind::Integer => ParameterShape::integer(options),
                ShapeKind::Rate => ParameterShape::rate(options),
                ShapeKind::Chance => ParameterShape::chance(options),
                _ => ParameterShape::number(options),
            };
        }

        // Bounds are ignored for non-numeric kinds.
        let options = ShapeOptions {
            kind: self.kind,
            default_value: self.default.clone(),
            validator: None,
            formatter,
        };
        match self.kind {
            ShapeKind::Boolean => ParameterShape::boolean(options),
            _ => ParameterShape::generic(options),
        }
    }
}

/// An ordered list of parameter specs.
///
/// Order matters: it is the definition order of the sets built from the
/// catalog and therefore the row order of passive-effect summaries.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterCatalog {
    pub parameters: Vec<ParameterSpec>,
}

impl ParameterCatalog {
    pub fn new(parameters: Vec<ParameterSpec>) -> Self {
        Self { parameters }
    }

    pub fn spec(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|spec| spec.name == name)
    }

    /// Label for `name`, or `name` itself when the catalog has no entry.
    pub fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.spec(name).map_or(name, ParameterSpec::label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Defines every spec, in order, on a fresh set.
    pub fn build_set(&self) -> params_core::Result<ParameterSet> {
        let mut set = ParameterSet::new();
        for spec in &self.parameters {
            let shape = spec.to_shape()?;
            set.define_via_shape(spec.name.clone(), shape)?;
        }

        tracing::debug!(parameters = set.len(), "built parameter set from catalog");
        Ok(set)
    }
}
