//! Journey pipeline: load -> filter rows -> build journeys -> differences -> summarize.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::path::Path;

use railstat_parser::{
    filter_complete_rows, parse_travel_log, parse_with_delimiter, Delimiter, TimestampFormat,
    TravelLog,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::aggregate::{compute_differences, summarize, JourneySummary};
use crate::config::ParserConfig;
use crate::error::{PipelineError, Result};
use crate::journey::{build_journeys, Journey};
use crate::stations::distinct_stations;

#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub file_hash: String,
    pub journeys: Vec<Journey>,
    pub summary: JourneySummary,
    pub stations: BTreeSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct JourneyPipeline {
    delimiter: Option<Delimiter>,
    format: TimestampFormat,
}

impl JourneyPipeline {
    pub fn new(delimiter: Option<Delimiter>, format: TimestampFormat) -> Self {
        Self { delimiter, format }
    }

    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        Ok(Self::new(config.delimiter()?, config.timestamp_format()))
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.format
    }

    /// Reads and decodes the selected file. No selection is an input error.
    pub async fn load(&self, path: Option<&Path>) -> Result<TravelLog> {
        let path = path.ok_or_else(|| {
            PipelineError::InvalidInput("no travel history file selected".to_string())
        })?;
        let bytes = tokio::fs::read(path).await?;
        info!(path = %path.display(), bytes = bytes.len(), "travel history read");
        self.parse(&decode(&bytes))
    }

    pub fn parse(&self, content: &str) -> Result<TravelLog> {
        if content.trim().is_empty() {
            return Err(PipelineError::InvalidInput(
                "travel history is empty".to_string(),
            ));
        }
        let log = match self.delimiter {
            Some(delimiter) => parse_with_delimiter(content, delimiter)?,
            None => parse_travel_log(content)?,
        };
        debug!(
            file_hash = %log.file_hash,
            delimiter = %log.delimiter,
            rows = log.len(),
            "travel history decoded"
        );
        Ok(log)
    }

    pub fn process(&self, log: TravelLog) -> Result<PipelineOutput> {
        let TravelLog {
            file_hash, rows, ..
        } = log;

        let total_rows = rows.len();
        let rows = filter_complete_rows(rows);
        debug!(
            kept = rows.len(),
            dropped = total_rows - rows.len(),
            "incomplete rows dropped"
        );

        let journeys = build_journeys(&rows, &self.format)?;
        let journeys = compute_differences(journeys);
        let summary = summarize(&journeys)?;
        let stations = distinct_stations(&journeys);

        info!(
            file_hash = %file_hash,
            journeys = summary.count,
            total_minutes = summary.total_minutes,
            "journeys summarized"
        );

        Ok(PipelineOutput {
            file_hash,
            journeys,
            summary,
            stations,
        })
    }

    pub async fn run(&self, path: Option<&Path>) -> Result<PipelineOutput> {
        let log = self.load(path).await?;
        self.process(log)
    }

    /// Same as [`JourneyPipeline::run`] for content that is already in memory.
    pub fn ingest(&self, content: &str) -> Result<PipelineOutput> {
        let log = self.parse(content)?;
        self.process(log)
    }

    /// Raw upload bytes, decoded the same way as [`JourneyPipeline::load`].
    pub fn ingest_bytes(&self, bytes: &[u8]) -> Result<PipelineOutput> {
        self.ingest(&decode(bytes))
    }
}

/// Exports are not always UTF-8 (Latin-1 headers are common); invalid
/// sequences become U+FFFD instead of failing the upload.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let content = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = content {
        warn!("travel history is not valid UTF-8, invalid bytes replaced");
    }
    content
}
