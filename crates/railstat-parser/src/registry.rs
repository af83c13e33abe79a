use tracing::debug;

use crate::errors::{ParserAttempt, ParserError};
use crate::formats::DelimitedParser;
use crate::model::{Delimiter, TravelLog};

pub trait TravelLogParser {
    fn name(&self) -> &'static str;
    fn parse(&self, content: &str) -> Result<TravelLog, ParserError>;
}

/// Parses an export whose delimiter is not known up front.
pub fn parse_travel_log(content: &str) -> Result<TravelLog, ParserError> {
    let comma = DelimitedParser::detecting(Delimiter::Comma);
    let semicolon = DelimitedParser::detecting(Delimiter::Semicolon);
    let tab = DelimitedParser::detecting(Delimiter::Tab);
    let parsers: [&dyn TravelLogParser; 3] = [&comma, &semicolon, &tab];
    parse_with_parsers(content, &parsers)
}

pub fn parse_with_delimiter(content: &str, delimiter: Delimiter) -> Result<TravelLog, ParserError> {
    DelimitedParser::new(delimiter).parse(content)
}

pub fn parse_with_parsers(
    content: &str,
    parsers: &[&dyn TravelLogParser],
) -> Result<TravelLog, ParserError> {
    let mut attempts = Vec::new();

    for parser in parsers {
        match parser.parse(content) {
            Ok(parsed) => {
                debug!(
                    parser = parser.name(),
                    rejected = attempts.len(),
                    "delimiter detected"
                );
                return Ok(parsed);
            }
            Err(ParserError::FormatMismatch { reason, .. }) => {
                debug!(parser = parser.name(), %reason, "delimiter rejected");
                attempts.push(ParserAttempt::new(parser.name(), reason));
            }
            Err(err) => return Err(err),
        }
    }

    Err(ParserError::NoMatchingParser { attempts })
}
