pub mod errors;
pub mod filter;
pub mod formats;
pub mod model;
mod registry;
pub mod timestamp;

pub use errors::{ParserAttempt, ParserError};
pub use filter::filter_complete_rows;
pub use formats::DelimitedParser;
pub use model::{Column, Delimiter, RawRow, TravelLog};
pub use registry::{parse_travel_log, parse_with_delimiter, parse_with_parsers, TravelLogParser};
pub use timestamp::TimestampFormat;
