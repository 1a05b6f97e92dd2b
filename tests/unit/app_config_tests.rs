/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use country_translator::app_config::{Config, LogLevel};
use country_translator::{LoadError, Translator};
use log::LevelFilter;
use std::path::PathBuf;

use crate::common::{self, CANADA_JSON};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.resource, "sample.json");
    assert_eq!(config.data_dir, None);
    assert_eq!(config.default_language, "en");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.resource = "../sample.json".to_string();
    assert!(config.validate().is_err());
    config.resource = "".to_string();
    assert!(config.validate().is_err());
    config.resource = "sample.json".to_string();

    config.default_language = "xyz".to_string();
    assert!(config.validate().is_err());
    config.default_language = "fre".to_string();
    assert!(config.validate().is_ok());

    config.data_dir = Some(PathBuf::from("/definitely/not/a/real/dir"));
    assert!(config.validate().is_err());
}

#[test]
fn test_loadOrDefault_withMissingFile_shouldReturnDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load_or_default(temp_dir.path().join("conf.json"))?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_loadOrDefault_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"default_language": "fr", "log_level": "debug"}"#,
    )?;

    let config = Config::load_or_default(&path)?;
    assert_eq!(config.default_language, "fr");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.resource, "sample.json");
    Ok(())
}

#[test]
fn test_loadOrDefault_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    let error = Config::load_or_default(&path).unwrap_err();
    assert!(error.to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}

#[test]
fn test_openTranslator_withDataDir_shouldLoadFromDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "canada.json", CANADA_JSON)?;

    let config = Config {
        resource: "canada.json".to_string(),
        data_dir: Some(temp_dir.path().to_path_buf()),
        ..Config::default()
    };
    config.validate()?;

    let translator = config.open_translator()?;
    assert_eq!(translator.get_countries(), vec!["can"]);
    Ok(())
}

#[test]
fn test_openTranslator_withDataDirMissingDefault_shouldReportNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config {
        data_dir: Some(temp_dir.path().to_path_buf()),
        ..Config::default()
    };

    let error = config.open_translator().unwrap_err();
    assert!(matches!(error.load_error(), LoadError::NotFound(name) if name == "sample.json"));
    Ok(())
}
