use anyhow::Result;
use railstat_core::config::{ParserConfig, RailstatConfig, DEFAULT_BIND};
use railstat_core::{JourneyPipeline, PipelineError};
use railstat_parser::Delimiter;

#[test]
fn empty_config_uses_defaults() -> Result<()> {
    let config = RailstatConfig::from_toml("")?;
    assert_eq!(config, RailstatConfig::default());
    assert_eq!(config.parser.delimiter()?, None);
    assert_eq!(config.parser.timestamp_format().pattern(), "%d-%m-%Y %H:%M");
    assert_eq!(config.server.bind, DEFAULT_BIND);
    Ok(())
}

#[test]
fn partial_config_overrides_only_given_keys() -> Result<()> {
    let config = RailstatConfig::from_toml(
        r#"
        [parser]
        delimiter = ";"
        date_format = "%Y-%m-%d"

        [server]
        bind = "0.0.0.0:8080"
        "#,
    )?;

    assert_eq!(config.parser.delimiter()?, Some(Delimiter::Semicolon));
    assert_eq!(config.parser.time_format, "%H:%M");
    assert_eq!(config.parser.timestamp_format().pattern(), "%Y-%m-%d %H:%M");
    assert_eq!(config.server.bind, "0.0.0.0:8080");

    let pipeline = JourneyPipeline::from_config(&config.parser)?;
    assert_eq!(pipeline.timestamp_format().date, "%Y-%m-%d");
    Ok(())
}

#[test]
fn tab_delimiter_is_accepted_from_toml() -> Result<()> {
    let config = RailstatConfig::from_toml("[parser]\ndelimiter = \"\\t\"\n")?;
    assert_eq!(config.parser.delimiter()?, Some(Delimiter::Tab));
    Ok(())
}

#[test]
fn unknown_delimiter_is_a_config_error() {
    let err = RailstatConfig::from_toml("[parser]\ndelimiter = \"|\"\n").expect_err("bad delimiter");
    assert!(matches!(err, PipelineError::Config(_)));

    let parser = ParserConfig {
        delimiter: "pipe".to_string(),
        ..ParserConfig::default()
    };
    assert!(JourneyPipeline::from_config(&parser).is_err());
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = RailstatConfig::from_toml("[parser\n").expect_err("broken toml");
    assert!(matches!(err, PipelineError::Config(_)));
}
