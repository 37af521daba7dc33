use super::{ParameterError, ParameterSet};
use crate::aggregate::aggregate_by_kind;
use crate::value::ParamValue;

/// Capability of an object that carries game parameters.
///
/// Implementors only expose their [`ParameterSet`]; the per-parameter
/// operations are provided. A composite (a creature wearing equipment, say)
/// overrides [`value`](Self::value) to fold in its sub-objects and leaves
/// [`raw_value`](Self::raw_value) alone, so the bare stored value stays
/// reachable. [`display_value`](Self::display_value) formats whatever `value`
/// returns.
///
/// # Example
/// ```
/// # use params_core::{ParameterHost, ParameterSet, ParamValue};
/// # use params_core::shape::NumberShapeOptions;
/// struct Sword {
///     parameters: ParameterSet,
/// }
///
/// impl ParameterHost for Sword {
///     fn parameters(&self) -> &ParameterSet {
///         &self.parameters
///     }
///
///     fn parameters_mut(&mut self) -> &mut ParameterSet {
///         &mut self.parameters
///     }
/// }
///
/// let mut sword = Sword { parameters: ParameterSet::new() };
/// sword.parameters.define_number("attack_power", NumberShapeOptions::new()).unwrap();
/// sword.set_value("attack_power", 7.into()).unwrap();
/// assert_eq!(sword.value("attack_power").unwrap(), ParamValue::Integer(7));
/// ```
pub trait ParameterHost {
    fn parameters(&self) -> &ParameterSet;

    fn parameters_mut(&mut self) -> &mut ParameterSet;

    /// The stored value of `name`, never adjusted.
    fn raw_value(&self, name: &str) -> Result<&ParamValue, ParameterError> {
        Ok(self.parameters().require(name)?.raw())
    }

    /// The effective value of `name`. Defaults to the raw value.
    fn value(&self, name: &str) -> crate::Result<ParamValue> {
        Ok(self.raw_value(name)?.clone())
    }

    /// Validates and stores `value` in the raw slot.
    fn set_value(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        self.parameters_mut().require_mut(name)?.set(value)
    }

    fn validate_value(&self, name: &str, value: &ParamValue) -> Result<bool, ParameterError> {
        Ok(self.parameters().require(name)?.validate(value))
    }

    /// Formats the effective value with the slot's shape.
    fn display_value(&self, name: &str) -> crate::Result<String> {
        let shape = self.parameters().require(name)?.shape();
        Ok(shape.display_value(&self.value(name)?))
    }
}

impl ParameterHost for ParameterSet {
    fn parameters(&self) -> &ParameterSet {
        self
    }

    fn parameters_mut(&mut self) -> &mut ParameterSet {
        self
    }
}

/// Folds `host`'s raw value of `name` with the effective values of `modifiers`.
///
/// The rule comes from the host slot's shape kind. Modifiers that do not
/// define `name` contribute nothing.
pub fn compose_value<'a, M>(
    host: &(impl ParameterHost + ?Sized),
    name: &str,
    modifiers: M,
) -> crate::Result<ParamValue>
where
    M: IntoIterator<Item = &'a dyn ParameterHost>,
{
    let kind = host.parameters().require(name)?.shape().kind();

    let mut values = vec![host.raw_value(name)?.clone()];
    for modifier in modifiers {
        if modifier.parameters().contains(name) {
            values.push(modifier.value(name)?);
        }
    }

    Ok(aggregate_by_kind(kind, values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ParamsError};
    use crate::shape::{NumberShapeOptions, ShapeOptions};

    fn rated(rate: f64) -> ParameterSet {
        let mut set = ParameterSet::new();
        set.define_rate("max_hp_rate", NumberShapeOptions::new())
            .unwrap()
            .set(rate)
            .unwrap();
        set
    }

    /// Doubles whatever its inner set stores, to exercise the override point.
    struct Doubled(ParameterSet);

    impl ParameterHost for Doubled {
        fn parameters(&self) -> &ParameterSet {
            &self.0
        }

        fn parameters_mut(&mut self) -> &mut ParameterSet {
            &mut self.0
        }

        fn value(&self, name: &str) -> crate::Result<ParamValue> {
            let raw = self.raw_value(name)?.as_f64().unwrap_or_default();
            Ok(ParamValue::Number(raw * 2.0))
        }
    }

    #[test]
    fn parameter_set_is_a_host() {
        let mut set = rated(1.5);
        assert_eq!(set.value("max_hp_rate").unwrap(), ParamValue::Number(1.5));
        assert_eq!(set.validate_value("max_hp_rate", &(-1.0).into()), Ok(false));

        let err = set.set_value("max_hp_rate", (-1.0).into()).unwrap_err();
        assert_eq!(err.error_code(), "invalid_value");
        assert_eq!(set.raw_value("max_hp_rate").unwrap(), &ParamValue::Number(1.5));
    }

    #[test]
    fn unknown_names_are_errors() {
        let set = ParameterSet::new();
        assert!(matches!(
            set.value("max_hp_rate"),
            Err(Error::Parameter(ParameterError::UnknownParameter { .. }))
        ));
        assert!(set.display_value("max_hp_rate").is_err());
    }

    #[test]
    fn display_follows_overridden_value() {
        let host = Doubled(rated(1.5));
        assert_eq!(host.raw_value("max_hp_rate").unwrap(), &ParamValue::Number(1.5));
        assert_eq!(host.value("max_hp_rate").unwrap(), ParamValue::Number(3.0));
        assert_eq!(host.display_value("max_hp_rate").unwrap(), "3");
    }

    #[test]
    fn compose_uses_modifier_public_values() {
        let base = rated(2.0);
        let buff = Doubled(rated(1.5));
        let unrelated = ParameterSet::new();

        let modifiers: Vec<&dyn ParameterHost> = vec![&buff, &unrelated];
        let composed = compose_value(&base, "max_hp_rate", modifiers).unwrap();
        // 2.0 × (1.5 × 2)
        assert_eq!(composed, ParamValue::Number(6.0));
    }

    #[test]
    fn compose_rejects_untyped_parameters() {
        let mut base = ParameterSet::new();
        base.define("note", ShapeOptions::new().with_default("x")).unwrap();
        let err = compose_value(&base, "note", Vec::<&dyn ParameterHost>::new()).unwrap_err();
        assert!(matches!(err, Error::Aggregate(_)));
    }
}
