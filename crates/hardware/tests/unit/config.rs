//! Configuration defaults and deserialization.

use std::fs;

use pretty_assertions::assert_eq;
use rvsbp_core::config::{Config, GeneralConfig, IndirectTarget, PredictorConfig};
use rvsbp_core::Error;
use tempfile::tempdir;

#[test]
fn defaults_model_rv32ic() {
    let config = Config::default();
    assert!(!config.general.trace_predictions);
    assert!(config.predictor.compressed);
    assert_eq!(config.predictor.indirect_target, IndirectTarget::FetchRelative);
}

#[test]
fn empty_document_is_default() {
    assert_eq!(Config::from_json("{}").expect("empty object"), Config::default());
}

#[test]
fn partial_sections_keep_defaults() {
    let config = Config::from_json(r#"{ "predictor": { "indirect_target": "sequential" } }"#)
        .expect("partial config");
    assert_eq!(
        config,
        Config {
            general: GeneralConfig::default(),
            predictor: PredictorConfig {
                compressed: true,
                indirect_target: IndirectTarget::Sequential,
            },
        }
    );
}

#[test]
fn policy_accepts_both_spellings() {
    for name in ["FetchRelative", "fetch_relative"] {
        let json = format!(r#"{{ "predictor": {{ "indirect_target": "{name}" }} }}"#);
        let config = Config::from_json(&json).expect(name);
        assert_eq!(config.predictor.indirect_target, IndirectTarget::FetchRelative);
    }
}

#[test]
fn unknown_policy_is_rejected() {
    let err = Config::from_json(r#"{ "predictor": { "indirect_target": "Oracle" } }"#)
        .expect_err("unknown policy");
    assert!(matches!(err, Error::Json(_)), "{err}");
}

#[test]
fn load_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("sbp.json");
    fs::write(&path, r#"{ "general": { "trace_predictions": true } }"#).expect("write config");

    let config = Config::load(&path).expect("load config");
    assert!(config.general.trace_predictions);
    assert!(config.predictor.compressed);
}

#[test]
fn load_missing_file() {
    let dir = tempdir().expect("tempdir");
    let err = Config::load(dir.path().join("none.json")).expect_err("missing config");
    assert!(matches!(err, Error::Io { .. }), "{err}");
}

#[test]
fn serialized_config_parses_back() {
    let config = Config::from_json(r#"{ "predictor": { "compressed": false } }"#).expect("config");
    let json = serde_json::to_string(&config).expect("serialize");
    assert_eq!(Config::from_json(&json).expect("reparse"), config);
}
