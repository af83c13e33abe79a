use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use railstat_core::{JourneyPipeline, PipelineError, Session};
use railstat_parser::{Delimiter, ParserError, TimestampFormat};
use tokio::runtime::Runtime;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../railstat-parser/tests/data")
        .join(name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("read fixture")
}

#[test]
fn run_loads_filters_and_summarizes_export() -> Result<()> {
    let rt = Runtime::new()?;
    let pipeline = JourneyPipeline::default();
    let path = fixture_path("travel_history.csv");

    let output = rt.block_on(pipeline.run(Some(path.as_path())))?;

    let differences: Vec<i64> = output.journeys.iter().map(|j| j.difference).collect();
    assert_eq!(differences, [45, 20, 30]);

    assert_eq!(output.summary.count, 3);
    assert_eq!(output.summary.total_minutes, 95);
    assert_eq!(output.summary.max_minutes, 45);
    assert_eq!(output.summary.min_minutes, 20);
    assert!((output.summary.average_minutes - 95.0 / 3.0).abs() < 1e-9);

    let stations: Vec<&str> = output.stations.iter().map(String::as_str).collect();
    assert_eq!(
        stations,
        ["Amsterdam Centraal", "Schiphol Airport", "Utrecht Centraal"]
    );
    assert_eq!(output.file_hash.len(), 64);
    Ok(())
}

#[tokio::test]
async fn latin1_export_is_decoded_lossily() -> Result<()> {
    let path = fixture_path("travel_history_latin1.csv");
    let bytes = std::fs::read(&path)?;
    assert!(std::str::from_utf8(&bytes).is_err());

    let pipeline = JourneyPipeline::default();
    let from_file = pipeline.run(Some(path.as_path())).await?;
    assert_eq!(from_file.summary.count, 3);
    assert_eq!(from_file.summary.total_minutes, 95);

    let from_upload = pipeline.ingest_bytes(&bytes)?;
    assert_eq!(from_upload.summary, from_file.summary);
    assert_eq!(from_upload.file_hash, from_file.file_hash);
    Ok(())
}

#[tokio::test]
async fn load_without_a_file_is_invalid_input() {
    let err = JourneyPipeline::default()
        .load(None)
        .await
        .expect_err("no file selected");
    assert!(matches!(err, PipelineError::InvalidInput(_)));
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let path = fixture_path("does_not_exist.csv");
    let err = JourneyPipeline::default()
        .run(Some(path.as_path()))
        .await
        .expect_err("missing file");
    assert!(matches!(err, PipelineError::Io(_)));
}

#[test]
fn blank_upload_is_invalid_input() {
    let err = JourneyPipeline::default()
        .ingest("  \n")
        .expect_err("blank content");
    assert!(matches!(err, PipelineError::InvalidInput(_)));
}

#[test]
fn header_only_upload_is_empty_result_set() {
    let content = fixture("travel_history.csv");
    let header = content.lines().next().expect("header");
    let err = JourneyPipeline::default()
        .ingest(header)
        .expect_err("no journeys");
    assert!(matches!(err, PipelineError::EmptyResultSet));
}

#[test]
fn malformed_row_aborts_the_pipeline() {
    let err = JourneyPipeline::default()
        .ingest(&fixture("malformed_row.csv"))
        .expect_err("short row");
    assert!(matches!(
        err,
        PipelineError::Parser(ParserError::MalformedRow { line: 3, .. })
    ));
}

#[test]
fn invalid_time_aborts_the_pipeline() {
    let err = JourneyPipeline::default()
        .ingest(&fixture("invalid_time.csv"))
        .expect_err("bad time");
    assert!(matches!(
        err,
        PipelineError::Parser(ParserError::InvalidTimestamp { line: 3, .. })
    ));
}

#[test]
fn configured_delimiter_skips_detection() -> Result<()> {
    let pipeline = JourneyPipeline::new(Some(Delimiter::Semicolon), TimestampFormat::default());
    let output = pipeline.ingest(&fixture("travel_history_semicolon.csv"))?;
    assert_eq!(output.summary.count, 2);
    assert_eq!(output.summary.total_minutes, 65);

    let err = pipeline
        .ingest(&fixture("travel_history.csv"))
        .expect_err("comma file read as semicolon");
    assert!(matches!(
        err,
        PipelineError::Parser(ParserError::MalformedRow { .. })
    ));
    Ok(())
}

#[test]
fn session_refilters_without_reparsing() -> Result<()> {
    let pipeline = JourneyPipeline::default();
    let output = pipeline.ingest(&fixture("travel_history.csv"))?;

    let mut session = Session::new();
    session.replace(&output);

    let selected: HashSet<String> = ["Amsterdam Centraal", "Utrecht Centraal"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let summary = session.filter_summary(&selected)?;
    assert_eq!(summary.count, 1);
    assert_eq!(summary.total_minutes, 45);
    Ok(())
}
