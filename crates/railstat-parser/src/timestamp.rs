use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ParserError;

pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// chrono format strings for the shared date column and the two time columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampFormat {
    pub date: String,
    pub time: String,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE_FORMAT.to_string(),
            time: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl TimestampFormat {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }

    pub fn pattern(&self) -> String {
        format!("{} {}", self.date, self.time)
    }

    /// Combines a date and a time field into one naive local timestamp.
    pub fn parse(&self, line: usize, date: &str, time: &str) -> Result<NaiveDateTime, ParserError> {
        let value = format!("{} {}", date.trim(), time.trim());
        let pattern = self.pattern();
        NaiveDateTime::parse_from_str(&value, &pattern).map_err(|_| {
            ParserError::InvalidTimestamp {
                line,
                value,
                format: pattern,
            }
        })
    }
}
