//! Loading catalogs from disk and summarizing modifier sources.
#![cfg(feature = "loaders")]

use std::io::Write;

use params_content::{CatalogLoader, NO_FEATURES_TEXT, ParameterCatalog, PassiveEffects};
use params_core::{ParamValue, ParameterHost, ShapeKind};

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_ron_and_toml_files() {
    let ron = write_temp(
        ".ron",
        r#"(parameters: [(name: "speed_rate", kind: rate, label: Some("Speed"))])"#,
    );
    let toml = write_temp(
        ".toml",
        r#"
            [[parameters]]
            name = "speed_rate"
            kind = "rate"
            label = "Speed"
        "#,
    );

    let from_ron = CatalogLoader::load(ron.path()).unwrap();
    let from_toml = CatalogLoader::load(toml.path()).unwrap();
    assert_eq!(from_ron, from_toml);
    assert_eq!(from_ron.spec("speed_rate").unwrap().kind, ShapeKind::Rate);
}

#[test]
fn unknown_extensions_are_rejected() {
    let file = write_temp(".json", "{}");
    let err = CatalogLoader::load(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Unsupported catalog format"));
}

#[test]
fn missing_files_report_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.ron");
    let err = CatalogLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.ron"));
}

#[test]
fn builtin_catalog_starts_at_defaults() {
    let catalog = ParameterCatalog::modifiers().unwrap();
    let set = catalog.build_set().unwrap();

    assert_eq!(set.len(), catalog.len());
    assert_eq!(set.modified().count(), 0);
    assert_eq!(set.value("max_hp_rate").unwrap(), ParamValue::Number(1.0));
    assert_eq!(set.value("strength").unwrap(), ParamValue::Integer(0));
    assert_eq!(set.value("is_zombie").unwrap(), ParamValue::Boolean(false));
    assert_eq!(
        PassiveEffects::new(&catalog, &set)
            .text_or_placeholder()
            .unwrap(),
        NO_FEATURES_TEXT
    );
}

#[test]
fn item_summary_uses_catalog_labels_and_styles() {
    let catalog = ParameterCatalog::modifiers().unwrap();
    let mut shield = catalog.build_set().unwrap();
    shield.set_value("guard_chance", 0.25.into()).unwrap();
    shield
        .set_value("physical_damage_reduction_rate", 0.9.into())
        .unwrap();
    shield.set_value("dodge_power", (-0.1).into()).unwrap();
    shield.set_value("agility", (-2).into()).unwrap();

    let text = PassiveEffects::new(&catalog, &shield).text().unwrap();
    assert_eq!(
        text.as_deref(),
        Some("Agility: -2\nPhysical Damage Reduction: 10%\nDodge: -10%\nGuard: 25%")
    );
}

#[test]
fn rejected_writes_keep_the_default() {
    let catalog = ParameterCatalog::modifiers().unwrap();
    let mut set = catalog.build_set().unwrap();

    assert!(set.set_value("guard_chance", 1.5.into()).is_err());
    assert!(set.set_value("strength", 0.5.into()).is_err());
    assert_eq!(set.is_default("guard_chance"), Some(true));
    assert_eq!(set.is_default("strength"), Some(true));
}
