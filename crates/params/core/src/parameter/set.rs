use std::collections::HashMap;
use std::sync::Arc;

use super::{Parameter, ParameterError};
use crate::shape::{NumberShapeOptions, ParameterShape, ShapeOptions};

/// The parameter slots of one host, in definition order.
///
/// Definition order is display order: [`iter`](Self::iter) and
/// [`modified`](Self::modified) walk the slots as they were defined.
#[derive(Clone, Debug, Default)]
pub struct ParameterSet {
    parameters: Vec<Parameter>,
    index: HashMap<String, usize>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a slot governed by `shape` and initializes it to the default.
    ///
    /// Redefining an existing name replaces that slot in place.
    pub fn define_via_shape(
        &mut self,
        name: impl Into<String>,
        shape: impl Into<Arc<ParameterShape>>,
    ) -> Result<&mut Parameter, ParameterError> {
        let parameter = Parameter::new(name, shape)?;

        let position = match self.index.get(parameter.name()) {
            Some(&position) => {
                tracing::debug!(parameter = parameter.name(), "redefining parameter");
                self.parameters[position] = parameter;
                position
            }
            None => {
                let position = self.parameters.len();
                self.index.insert(parameter.name().to_owned(), position);
                self.parameters.push(parameter);
                position
            }
        };

        Ok(&mut self.parameters[position])
    }

    /// Defines a slot with an untyped shape.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        options: ShapeOptions,
    ) -> crate::Result<&mut Parameter> {
        let shape = ParameterShape::generic(options)?;
        Ok(self.define_via_shape(name, shape)?)
    }

    pub fn define_number(
        &mut self,
        name: impl Into<String>,
        options: NumberShapeOptions,
    ) -> crate::Result<&mut Parameter> {
        let shape = ParameterShape::number(options)?;
        Ok(self.define_via_shape(name, shape)?)
    }

    pub fn define_integer(
        &mut self,
        name: impl Into<String>,
        options: NumberShapeOptions,
    ) -> crate::Result<&mut Parameter> {
        let shape = ParameterShape::integer(options)?;
        Ok(self.define_via_shape(name, shape)?)
    }

    pub fn define_rate(
        &mut self,
        name: impl Into<String>,
        options: NumberShapeOptions,
    ) -> crate::Result<&mut Parameter> {
        let shape = ParameterShape::rate(options)?;
        Ok(self.define_via_shape(name, shape)?)
    }

    pub fn define_chance(
        &mut self,
        name: impl Into<String>,
        options: NumberShapeOptions,
    ) -> crate::Result<&mut Parameter> {
        let shape = ParameterShape::chance(options)?;
        Ok(self.define_via_shape(name, shape)?)
    }

    pub fn define_boolean(
        &mut self,
        name: impl Into<String>,
        options: ShapeOptions,
    ) -> crate::Result<&mut Parameter> {
        let shape = ParameterShape::boolean(options)?;
        Ok(self.define_via_shape(name, shape)?)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.index.get(name).map(|&i| &self.parameters[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.index.get(name).map(|&i| &mut self.parameters[i])
    }

    /// Like [`get`](Self::get), but an undefined name is an error.
    pub fn require(&self, name: &str) -> Result<&Parameter, ParameterError> {
        self.get(name).ok_or_else(|| unknown(name))
    }

    pub fn require_mut(&mut self, name: &str) -> Result<&mut Parameter, ParameterError> {
        self.get_mut(name).ok_or_else(|| unknown(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(Parameter::name)
    }

    /// Whether `name` still holds its default; `None` if it is not defined.
    pub fn is_default(&self, name: &str) -> Option<bool> {
        self.get(name).map(Parameter::is_default)
    }

    /// Slots whose value differs from their shape default, in definition order.
    pub fn modified(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| !p.is_default())
    }
}

fn unknown(name: &str) -> ParameterError {
    ParameterError::UnknownParameter {
        name: name.to_owned(),
    }
}
