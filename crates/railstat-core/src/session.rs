use std::collections::{BTreeSet, HashSet};

use tracing::info;

use crate::aggregate::{summarize, JourneySummary};
use crate::error::{PipelineError, Result};
use crate::journey::Journey;
use crate::pipeline::PipelineOutput;
use crate::stations::{distinct_stations, filter_by_stations};

/// Journeys from the last successful upload.
#[derive(Debug, Clone)]
pub struct WorkingSet {
    pub file_hash: String,
    pub journeys: Vec<Journey>,
}

/// Holds the working set between an upload and later station filters.
#[derive(Debug, Clone, Default)]
pub struct Session {
    working_set: Option<WorkingSet>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.working_set.is_some()
    }

    /// Replaces the working set wholesale.
    pub fn replace(&mut self, output: &PipelineOutput) {
        info!(
            file_hash = %output.file_hash,
            journeys = output.journeys.len(),
            "working set replaced"
        );
        self.working_set = Some(WorkingSet {
            file_hash: output.file_hash.clone(),
            journeys: output.journeys.clone(),
        });
    }

    pub fn clear(&mut self) {
        self.working_set = None;
    }

    pub fn working_set(&self) -> Result<&WorkingSet> {
        self.working_set.as_ref().ok_or(PipelineError::MissingState)
    }

    pub fn stations(&self) -> Result<BTreeSet<String>> {
        Ok(distinct_stations(&self.working_set()?.journeys))
    }

    pub fn filter(&self, selected: &HashSet<String>) -> Result<Vec<Journey>> {
        Ok(filter_by_stations(&self.working_set()?.journeys, selected))
    }

    pub fn filter_summary(&self, selected: &HashSet<String>) -> Result<JourneySummary> {
        let journeys = self.filter(selected)?;
        summarize(&journeys)
    }
}
