//! Parameter catalog loader.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;

use crate::catalog::ParameterCatalog;
use crate::loaders::{LoadResult, read_file};

/// Built-in catalog of the parameters skills, equipment and buffs modify.
const MODIFIERS_RON: &str = include_str!("../../data/modifiers.ron");

/// Loader for parameter catalogs from RON or TOML files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog, choosing the format from the file extension.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.ron` or `.toml` file containing a ParameterCatalog
    ///
    /// # Returns
    ///
    /// Returns a checked ParameterCatalog.
    pub fn load(path: &Path) -> LoadResult<ParameterCatalog> {
        let content = read_file(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let catalog = match extension.as_deref() {
            Some("ron") => Self::from_ron_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => anyhow::bail!(
                "Unsupported catalog format for {} (expected .ron or .toml)",
                path.display()
            ),
        }
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            parameters = catalog.len(),
            "loaded parameter catalog"
        );
        Ok(catalog)
    }

    /// Parse and check a catalog written in RON.
    pub fn from_ron_str(content: &str) -> LoadResult<ParameterCatalog> {
        let catalog: ParameterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        check(&catalog)?;
        Ok(catalog)
    }

    /// Parse and check a catalog written in TOML.
    pub fn from_toml_str(content: &str) -> LoadResult<ParameterCatalog> {
        let catalog: ParameterCatalog = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog TOML: {}", e))?;
        check(&catalog)?;
        Ok(catalog)
    }
}

impl ParameterCatalog {
    /// The built-in modifier catalog.
    pub fn modifiers() -> LoadResult<Self> {
        CatalogLoader::from_ron_str(MODIFIERS_RON).context("Built-in modifier catalog is invalid")
    }
}

/// Rejects duplicate names and specs whose shape cannot be built.
fn check(catalog: &ParameterCatalog) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for spec in catalog.iter() {
        if !seen.insert(spec.name.as_str()) {
            anyhow::bail!("Duplicate parameter `{}` in catalog", spec.name);
        }
        spec.to_shape()
            .with_context(|| format!("Invalid parameter `{}`", spec.name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use params_core::{DisplayStyle, ParamValue, ShapeKind};

    #[test]
    fn parses_ron_with_optional_fields() {
        let catalog = CatalogLoader::from_ron_str(
            r#"(
                parameters: [
                    (name: "strength", kind: integer, label: Some("Strength")),
                    (name: "max_hp_rate", kind: rate, default: Some(1.5), max: Some(3.0)),
                    (name: "hit_power", kind: number, display: Some(signed_percentage)),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 3);
        let rate = catalog.spec("max_hp_rate").unwrap();
        assert_eq!(rate.kind, ShapeKind::Rate);
        assert_eq!(rate.default, Some(ParamValue::Number(1.5)));
        assert_eq!(rate.max, Some(3.0));
        assert_eq!(
            catalog.spec("hit_power").unwrap().display,
            Some(DisplayStyle::SignedPercentage)
        );
    }

    #[test]
    fn parses_toml() {
        let catalog = CatalogLoader::from_toml_str(
            r#"
                [[parameters]]
                name = "gift_bonus"
                kind = "integer"
                default = 2

                [[parameters]]
                name = "cannot_guard"
                kind = "boolean"
                label = "Cannot Guard"
            "#,
        )
        .unwrap();

        assert_eq!(
            catalog.spec("gift_bonus").unwrap().default,
            Some(ParamValue::Integer(2))
        );
        assert_eq!(catalog.label("cannot_guard"), "Cannot Guard");
    }

    #[test]
    fn rejects_duplicates() {
        let err = CatalogLoader::from_ron_str(
            r#"(parameters: [(name: "a", kind: rate), (name: "a", kind: chance)])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate parameter `a`"));
    }

    #[test]
    fn rejects_invalid_defaults() {
        let err = CatalogLoader::from_ron_str(
            r#"(parameters: [(name: "guard_chance", kind: chance, default: Some(1.5))])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("guard_chance"));
    }

    #[test]
    fn rejects_unknown_kinds() {
        let err =
            CatalogLoader::from_ron_str(r#"(parameters: [(name: "x", kind: power)])"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog RON"));
    }

    #[test]
    fn builtin_modifiers_catalog_is_valid() {
        let catalog = ParameterCatalog::modifiers().unwrap();
        assert!(catalog.len() > 30);
        assert_eq!(catalog.spec("guard_chance").unwrap().kind, ShapeKind::Chance);
        assert_eq!(catalog.spec("cannot_guard").unwrap().kind, ShapeKind::Boolean);
    }
}
