use serde::Serialize;

use crate::error::{PipelineError, Result};
use crate::journey::Journey;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneySummary {
    pub count: usize,
    pub total_minutes: i64,
    pub average_minutes: f64,
    pub max_minutes: i64,
    pub min_minutes: i64,
}

pub fn compute_differences(journeys: Vec<Journey>) -> Vec<Journey> {
    journeys
        .into_iter()
        .map(|mut journey| {
            journey.difference = journey.elapsed_minutes();
            journey
        })
        .collect()
}

pub fn summarize(journeys: &[Journey]) -> Result<JourneySummary> {
    let differences = journeys.iter().map(|journey| journey.difference);

    let (Some(max_minutes), Some(min_minutes)) = (differences.clone().max(), differences.clone().min())
    else {
        return Err(PipelineError::EmptyResultSet);
    };

    let count = journeys.len();
    let total_minutes: i64 = differences.sum();

    Ok(JourneySummary {
        count,
        total_minutes,
        average_minutes: total_minutes as f64 / count as f64,
        max_minutes,
        min_minutes,
    })
}
