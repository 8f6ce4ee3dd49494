// Configuration module unit tests

use logostamp::config::*;
use logostamp::watermark::ScoringStrategy;
use std::path::PathBuf;

#[test]
fn test_full_yaml_config() {
    let yaml = r#"
input_dir: "/srv/photos"
output_dir: "/srv/stamped"
mode: best-placement
placement:
  light_logo: "brand/light.png"
  dark_logo: "brand/dark.png"
  logo_width: 250
  strategy: luminance-edge
tiled:
  logo: "brand/mark.png"
  spacing: 1.5
  offset_x: 20
  offset_y: 10
  opacity: 0.25
  logo_scale: 0.75
batch:
  parallel: true
logging:
  level: "logostamp=debug"
  json: false
"#;
    let config = Config::from_yaml_with_env(yaml).expect("Failed to parse config");

    assert_eq!(config.input_dir, PathBuf::from("/srv/photos"));
    assert_eq!(config.output_dir, PathBuf::from("/srv/stamped"));
    assert_eq!(config.mode, Mode::BestPlacement);
    assert_eq!(config.placement.light_logo, PathBuf::from("brand/light.png"));
    assert_eq!(config.placement.dark_logo, PathBuf::from("brand/dark.png"));
    assert_eq!(config.placement.logo_width, 250);
    assert_eq!(config.placement.strategy, ScoringStrategy::LuminanceEdge);
    assert_eq!(config.tiled.logo, PathBuf::from("brand/mark.png"));
    assert_eq!(config.tiled.spacing, 1.5);
    assert_eq!(config.tiled.offset_x, 20);
    assert_eq!(config.tiled.offset_y, 10);
    assert_eq!(config.tiled.opacity, 0.25);
    assert_eq!(config.tiled.logo_scale, 0.75);
    assert!(config.batch.parallel);
    assert_eq!(config.logging.level, "logostamp=debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_sections_fill_defaults() {
    let yaml = r#"
mode: tiled
tiled:
  opacity: 0.6
"#;
    let config = Config::from_yaml_with_env(yaml).unwrap();

    assert_eq!(config.mode, Mode::Tiled);
    assert_eq!(config.tiled.opacity, 0.6);
    assert_eq!(config.tiled.spacing, 2.0);
    assert_eq!(config.tiled.logo_scale, 0.5);
    assert_eq!(config.tiled.logo, PathBuf::from("assets/logo.png"));
    assert_eq!(config.placement.logo_width, 400);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_config_serializes_back_to_equal_value() {
    let config = Config {
        mode: Mode::Tiled,
        ..Default::default()
    };
    let yaml = serde_yaml::to_string(&config).unwrap();

    assert!(yaml.contains("mode: tiled"));
    assert_eq!(Config::from_yaml_with_env(&yaml).unwrap(), config);
}

#[test]
fn test_validation_rejects_zero_logo_width() {
    let mut config = Config::default();
    config.placement.logo_width = 0;

    assert!(config.validate().unwrap_err().contains("logo_width"));
}

#[test]
fn test_validation_rejects_bad_tiled_values() {
    let mut config = Config {
        mode: Mode::Tiled,
        ..Default::default()
    };
    config.tiled.spacing = -1.0;
    assert!(config.validate().unwrap_err().contains("spacing"));

    config.tiled.spacing = 2.0;
    config.tiled.logo_scale = 0.0;
    assert!(config.validate().unwrap_err().contains("logo_scale"));
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let yaml = r#"
placement:
  strategy: brightest-corner
"#;
    assert!(Config::from_yaml_with_env(yaml).is_err());
}
