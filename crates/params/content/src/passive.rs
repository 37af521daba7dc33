//! Passive-effect summaries for modifier sources.
//!
//! An item or skill usually changes only a handful of its parameters. The
//! summary lists those, one `"<label>: <value>"` row each, in catalog order.

use params_core::{ParamValue, ParameterHost};

use crate::catalog::ParameterCatalog;

/// Placeholder shown when a source changes nothing.
pub const NO_FEATURES_TEXT: &str = "Have no features";

/// One modified parameter, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct PassiveEffect {
    pub name: String,
    pub label: String,
    pub value: ParamValue,
    pub display: String,
}

/// Summary view over a host, labelled by a catalog.
pub struct PassiveEffects<'a, H: ParameterHost + ?Sized> {
    catalog: &'a ParameterCatalog,
    host: &'a H,
}

impl<'a, H: ParameterHost + ?Sized> PassiveEffects<'a, H> {
    pub fn new(catalog: &'a ParameterCatalog, host: &'a H) -> Self {
        Self { catalog, host }
    }

    /// Parameters whose effective value differs from their default.
    ///
    /// Catalog entries the host does not define are skipped.
    pub fn entries(&self) -> params_core::Result<Vec<PassiveEffect>> {
        let mut entries = Vec::new();
        for spec in self.catalog.iter() {
            let Some(parameter) = self.host.parameters().get(&spec.name) else {
                continue;
            };

            let value = self.host.value(&spec.name)?;
            if value.loosely_eq(parameter.shape().default_value()) {
                continue;
            }

            entries.push(PassiveEffect {
                name: spec.name.clone(),
                label: spec.label().to_owned(),
                display: parameter.shape().display_value(&value),
                value,
            });
        }
        Ok(entries)
    }

    pub fn rows(&self) -> params_core::Result<Vec<String>> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|e| format!("{}: {}", e.label, e.display))
            .collect())
    }

    /// Rows joined by newlines, or `None` when nothing is modified.
    pub fn text(&self) -> params_core::Result<Option<String>> {
        let rows = self.rows()?;
        Ok((!rows.is_empty()).then(|| rows.join("\n")))
    }

    pub fn text_or_placeholder(&self) -> params_core::Result<String> {
        Ok(self
            .text()?
            .unwrap_or_else(|| NO_FEATURES_TEXT.to_owned()))
    }
}
