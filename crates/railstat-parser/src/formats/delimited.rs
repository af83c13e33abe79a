use crate::errors::ParserError;
use crate::model::{Column, Delimiter, RawRow, TravelLog};
use crate::registry::TravelLogParser;

use super::{hash_content, strip_bom};

/// Reads the 12-column export with a fixed field delimiter.
///
/// When `require_header_width` is set the header row must split into exactly
/// 12 fields, otherwise the parser reports a format mismatch so the registry
/// can try the next delimiter. The header is dropped either way.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedParser {
    delimiter: Delimiter,
    require_header_width: bool,
}

impl DelimitedParser {
    pub fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            require_header_width: false,
        }
    }

    pub fn detecting(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            require_header_width: true,
        }
    }

    fn csv_error(&self, source: csv::Error) -> ParserError {
        ParserError::Csv {
            parser: self.name(),
            source,
        }
    }
}

impl TravelLogParser for DelimitedParser {
    fn name(&self) -> &'static str {
        match self.delimiter {
            Delimiter::Comma => "COMMA_SEPARATED",
            Delimiter::Semicolon => "SEMICOLON_SEPARATED",
            Delimiter::Tab => "TAB_SEPARATED",
        }
    }

    fn parse(&self, content: &str) -> Result<TravelLog, ParserError> {
        let body = strip_bom(content);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter.as_byte())
            .from_reader(body.as_bytes());

        let mut records = reader.records();

        let header = records
            .next()
            .ok_or(ParserError::MissingHeader)?
            .map_err(|err| self.csv_error(err))?;

        if self.require_header_width && header.len() != Column::COUNT {
            return Err(ParserError::FormatMismatch {
                parser: self.name(),
                reason: format!(
                    "header split into {} fields, expected {}",
                    header.len(),
                    Column::COUNT
                ),
            });
        }

        let mut rows = Vec::new();
        for record in records {
            let record = record.map_err(|err| self.csv_error(err))?;
            // csv positions are 1-based; fall back to counting (header is line 1)
            let line = record
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(rows.len() + 2);

            let row = RawRow::from_record(line, &record).ok_or(ParserError::MalformedRow {
                line,
                expected: Column::COUNT,
                found: record.len(),
            })?;
            rows.push(row);
        }

        Ok(TravelLog {
            file_hash: hash_content(content),
            delimiter: self.delimiter,
            rows,
        })
    }
}
