//! Tests for the configuration model.

use crate::config::AnalysisConfig;
use crate::config::types::{BackgroundMethod, Frame, MapSelection, ReductionType};
use crate::error::Error;
use crate::quantity::EnergyUnit;

#[test]
fn test_default_config() {
    let config = AnalysisConfig::default();

    assert_eq!(config.general.log.level, "info");
    assert_eq!(config.general.outdir, ".");
    assert_eq!(
        config.observations.datastore.to_string_lossy(),
        "$CHERENKOV_DATA/hess-dl3-dr1/"
    );
    assert!(config.observations.obs_ids.is_empty());
    assert!(config.observations.obs_file.is_none());
    assert!(config.observations.obs_cone.frame.is_none());
    assert!(config.observations.obs_time.start.is_none());

    assert_eq!(config.datasets.r#type, ReductionType::Spectrum);
    assert!(config.datasets.stack);
    assert!(config.datasets.containment_correction);
    assert_eq!(config.datasets.map_selection, MapSelection::available());
    assert_eq!(config.datasets.background.method, BackgroundMethod::Reflected);

    let axis = &config.datasets.geom.axes.energy;
    assert_eq!(axis.min.value(), 0.1);
    assert_eq!(axis.min.unit(), EnergyUnit::Tev);
    assert_eq!(axis.max.value(), 10.0);
    assert_eq!(axis.nbins, 30);

    assert_eq!(config.datasets.geom.selection.offset_max.to_string(), "2.5 deg");
    assert_eq!(config.datasets.geom.wcs.binsize.to_string(), "0.1 deg");
    assert_eq!(config.datasets.geom.wcs.fov.width.to_string(), "5 deg");

    assert_eq!(config.fit.fit_range.min.to_string(), "0.1 TeV");
    assert_eq!(config.fit.fit_range.max.to_string(), "10 TeV");
    assert_eq!(config.flux_points.energy.nbins, 30);
}

#[test]
fn test_parse_empty_mapping_uses_defaults() {
    let config = AnalysisConfig::from_yaml("{}").unwrap();
    assert_eq!(config, AnalysisConfig::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
datasets:
    stack: false
observations:
    obs_ids: [23523, 23526]
"#;
    let config = AnalysisConfig::from_yaml(yaml).unwrap();

    // Specified values should be used
    assert!(!config.datasets.stack);
    assert_eq!(config.observations.obs_ids, vec![23523, 23526]);

    // Unspecified values should use defaults
    assert_eq!(config.datasets.r#type, ReductionType::Spectrum);
    assert_eq!(config.general.log.level, "info");
}

#[test]
fn test_parse_quantities_and_times() {
    let yaml = r#"
datasets:
    on_region:
        frame: icrs
        lon: 83.633 deg
        lat: 22.014 deg
        radius: 0.11 deg
observations:
    obs_time:
        start: "2004-03-26"
        stop: "2004-05-01 12:00:00"
"#;
    let config = AnalysisConfig::from_yaml(yaml).unwrap();

    let region = &config.datasets.on_region;
    assert_eq!(region.frame, Some(Frame::Icrs));
    assert_eq!(region.lon.unwrap().value(), 83.633);
    assert_eq!(region.radius.unwrap().to_string(), "0.11 deg");

    let time = &config.observations.obs_time;
    assert_eq!(time.start.unwrap().to_string(), "2004-03-26 00:00:00.000");
    assert_eq!(time.stop.unwrap().to_string(), "2004-05-01 12:00:00.000");
}

#[test]
fn test_unknown_field_top_level_fails() {
    let result = AnalysisConfig::from_yaml("bogus_field: 1\n");

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Schema(_)));
    assert!(err.to_string().contains("bogus_field"));
}

#[test]
fn test_unknown_field_nested_fails() {
    let yaml = r#"
datasets:
    geom:
        wcs:
            bogus_field: 1
"#;
    let err = AnalysisConfig::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, Error::Schema(_)));
    assert!(err.to_string().contains("bogus_field"));
}

#[test]
fn test_energy_field_rejects_wrong_dimension() {
    let yaml = r#"
fit:
    fit_range:
        min: 5 deg
"#;
    let err = AnalysisConfig::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().contains("invalid unit for energy: 'deg'"));
}

#[test]
fn test_energy_field_accepts_energy_unit() {
    let yaml = r#"
fit:
    fit_range:
        min: 5 TeV
"#;
    let config = AnalysisConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.fit.fit_range.min.value(), 5.0);
    assert_eq!(config.fit.fit_range.min.unit(), EnergyUnit::Tev);
}

#[test]
fn test_enum_field_rejects_out_of_set_literal() {
    let err = AnalysisConfig::from_yaml("datasets:\n    type: 2d\n").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().contains("2d"));
}

#[test]
fn test_to_yaml_declaration_order_and_encoders() {
    let yaml = AnalysisConfig::default().to_yaml().unwrap();

    // Sections come out in declaration order, not alphabetical.
    let positions: Vec<usize> = ["general:", "observations:", "datasets:", "fit:", "flux_points:"]
        .iter()
        .map(|section| yaml.find(section).unwrap())
        .collect();
    assert!(positions.is_sorted());

    // Quantities render through the custom encoders, nulls stay explicit.
    assert!(yaml.contains("min: 0.1 TeV"));
    assert!(yaml.contains("offset_max: 2.5 deg"));
    assert!(yaml.contains("obs_file: null"));
}

#[test]
fn test_round_trip_default() {
    let config = AnalysisConfig::default();
    let reparsed = AnalysisConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
    assert_eq!(reparsed, config);
}

#[test]
fn test_round_trip_with_explicit_values() {
    let yaml = r#"
general:
    log:
        level: debug
        filename: run.log
    outdir: out
observations:
    obs_ids: [23523]
    obs_cone:
        frame: galactic
        lon: 0 deg
        lat: 0 deg
        radius: 3 deg
    obs_time:
        start: "2004-03-26"
datasets:
    type: "3d"
    stack: false
    map_selection: [counts, exposure]
"#;
    let config = AnalysisConfig::from_yaml(yaml).unwrap();
    let reparsed = AnalysisConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
    assert_eq!(reparsed, config);
}

#[test]
fn test_update_overrides_explicit_fields_only() {
    let base = AnalysisConfig::default();
    let updated = base.update_from_yaml("datasets:\n    type: \"3d\"\n").unwrap();

    // The explicitly-set override field wins.
    assert_eq!(updated.datasets.r#type, ReductionType::Cube);
    // Untouched defaults survive.
    assert!(updated.datasets.stack);
    assert_eq!(updated.fit, base.fit);
}

#[test]
fn test_update_preserves_non_default_base_values() {
    let base = AnalysisConfig::from_yaml("datasets:\n    stack: false\n").unwrap();
    let updated = base
        .update_from_yaml("fit:\n    fit_range:\n        max: 30 TeV\n")
        .unwrap();

    assert!(!updated.datasets.stack);
    assert_eq!(updated.fit.fit_range.max.to_string(), "30 TeV");
}

#[test]
fn test_update_override_at_default_does_not_clobber() {
    // Re-setting a field to its default is indistinguishable from never
    // touching it; the non-default base value stays.
    let base = AnalysisConfig::from_yaml("datasets:\n    stack: false\n").unwrap();
    let updated = base.update_from_yaml("datasets:\n    stack: true\n").unwrap();

    assert!(!updated.datasets.stack);
}

#[test]
fn test_update_replaces_lists_wholesale() {
    let base = AnalysisConfig::from_yaml("datasets:\n    map_selection: [counts]\n").unwrap();
    let updated = base
        .update_from_yaml("datasets:\n    map_selection: [psf, edisp]\n")
        .unwrap();

    assert_eq!(
        updated.datasets.map_selection,
        vec![MapSelection::Psf, MapSelection::Edisp]
    );
}

#[test]
fn test_update_with_config_instance() {
    let base = AnalysisConfig::default();
    let overrides = AnalysisConfig::from_template("3d").unwrap();
    let updated = base.update(&overrides).unwrap();

    assert_eq!(updated.datasets.r#type, ReductionType::Cube);
    assert_eq!(updated.datasets.geom.wcs.fov.width.to_string(), "10 deg");
}

#[test]
fn test_update_invalid_override_fails_without_touching_base() {
    let base = AnalysisConfig::from_yaml("datasets:\n    stack: false\n").unwrap();
    let before = base.clone();

    let err = base.update_from_yaml("datasets:\n    type: spectrum\n").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(base, before);
}

#[test]
fn test_update_from_value_mapping() {
    let value = serde_yaml::from_str("datasets:\n    type: \"3d\"\n").unwrap();
    let updated = AnalysisConfig::default().update_from_value(value).unwrap();

    assert_eq!(updated.datasets.r#type, ReductionType::Cube);
}

#[test]
fn test_from_template_1d() {
    let config = AnalysisConfig::from_template("1d").unwrap();

    assert_eq!(config.datasets.r#type, ReductionType::Spectrum);
    assert_eq!(config.datasets.on_region.radius.unwrap().to_string(), "0.11 deg");
    assert_eq!(config.observations.obs_ids.len(), 4);
}

#[test]
fn test_from_template_3d() {
    let config = AnalysisConfig::from_template("3d").unwrap();

    assert_eq!(config.datasets.r#type, ReductionType::Cube);
    assert!(!config.datasets.stack);
    assert_eq!(config.datasets.geom.wcs.skydir.frame, Some(Frame::Galactic));
    assert_eq!(config.datasets.geom.wcs.binsize.to_string(), "0.02 deg");
}

#[test]
fn test_from_template_unknown_key_fails() {
    let err = AnalysisConfig::from_template("2d").unwrap_err();
    assert!(matches!(err, Error::UnknownTemplate(_)));
    assert!(err.to_string().contains("'2d'"));
}

#[test]
fn test_templates_round_trip() {
    for template in ["1d", "3d"] {
        let config = AnalysisConfig::from_template(template).unwrap();
        let reparsed = AnalysisConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(reparsed, config, "template: {}", template);
    }
}

#[test]
fn test_read_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");

    let config = AnalysisConfig::from_template("1d").unwrap();
    config.write(&path, false).unwrap();

    let loaded = AnalysisConfig::read(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_read_missing_file_fails() {
    let result = AnalysisConfig::read("/nonexistent/path/config.yaml");

    let err = result.unwrap_err();
    assert!(matches!(err, Error::FileRead { .. }));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_write_guard_refuses_existing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "keep me\n").unwrap();

    let err = AnalysisConfig::default().write(&path, false).unwrap_err();
    assert!(matches!(err, Error::FileExists(_)));

    // The existing content is untouched.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me\n");
}

#[test]
fn test_write_overwrite_replaces_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "old content\n").unwrap();

    let config = AnalysisConfig::default();
    config.write(&path, true).unwrap();

    let loaded = AnalysisConfig::read(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
#[serial_test::serial]
fn test_datastore_path_expands_env() {
    // SAFETY: tests touching process env are serialized.
    unsafe { std::env::set_var("CHERENKOV_DATA", "/data/cherenkov") };

    let config = AnalysisConfig::default();
    assert_eq!(
        config.observations.datastore_path(),
        std::path::PathBuf::from("/data/cherenkov/hess-dl3-dr1/")
    );

    unsafe { std::env::remove_var("CHERENKOV_DATA") };
}

#[test]
fn test_display_is_name_plus_indented_yaml() {
    let rendered = AnalysisConfig::default().to_string();

    assert!(rendered.starts_with("AnalysisConfig\n\n"));
    assert!(rendered.contains("    general:"));
    assert!(rendered.contains("    datasets:"));
}
