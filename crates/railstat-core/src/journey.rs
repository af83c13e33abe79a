use chrono::{Duration, NaiveDateTime};
use railstat_parser::{RawRow, TimestampFormat};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Journey {
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub departure_station: Option<String>,
    pub arrival_station: Option<String>,
    /// Minutes in transit. Zero until [`crate::aggregate::compute_differences`] runs.
    pub difference: i64,
}

impl Journey {
    /// Builds a journey from two timestamps that share one calendar date.
    ///
    /// An arrival earlier than the departure is taken to be past midnight and
    /// is moved forward by exactly one day. Journeys spanning more than one
    /// midnight are not representable in the export and come out short.
    pub fn new(
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        departure_station: Option<String>,
        arrival_station: Option<String>,
    ) -> Self {
        let arrival = if arrival < departure {
            arrival + Duration::days(1)
        } else {
            arrival
        };

        Self {
            departure,
            arrival,
            departure_station,
            arrival_station,
            difference: 0,
        }
    }

    pub fn elapsed_minutes(&self) -> i64 {
        (self.arrival - self.departure).num_minutes()
    }

    pub fn rolled_over(&self) -> bool {
        self.arrival.date() > self.departure.date()
    }
}

fn station(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn build_journey(row: &RawRow, format: &TimestampFormat) -> Result<Journey> {
    let departure = format.parse(row.line, &row.date, &row.departure_time)?;
    let arrival = format.parse(row.line, &row.date, &row.arrival_time)?;

    let journey = Journey::new(
        departure,
        arrival,
        station(&row.departure_station),
        station(&row.arrival_station),
    );
    if journey.rolled_over() {
        debug!(line = row.line, arrival = %journey.arrival, "arrival moved past midnight");
    }
    Ok(journey)
}

/// Maps every row to exactly one journey; the first unparseable timestamp aborts.
pub fn build_journeys(rows: &[RawRow], format: &TimestampFormat) -> Result<Vec<Journey>> {
    rows.iter().map(|row| build_journey(row, format)).collect()
}
