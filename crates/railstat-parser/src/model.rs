use std::fmt;

use serde::{Deserialize, Serialize};

/// Positional columns of the travel history export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Date,
    DepartureTime,
    DepartureStation,
    ArrivalTime,
    ArrivalStation,
    Spent,
    Earned,
    Transaction,
    Class,
    Product,
    Private,
    Note,
}

impl Column {
    pub const COUNT: usize = 12;

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::DepartureTime => "departure_time",
            Column::DepartureStation => "departure_station",
            Column::ArrivalTime => "arrival_time",
            Column::ArrivalStation => "arrival_station",
            Column::Spent => "spent",
            Column::Earned => "earned",
            Column::Transaction => "transaction",
            Column::Class => "class",
            Column::Product => "product",
            Column::Private => "private",
            Column::Note => "note",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One data row of the export, decoded from fixed column positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based line of the record in the source file.
    pub line: usize,
    pub date: String,
    pub departure_time: String,
    pub departure_station: String,
    pub arrival_time: String,
    pub arrival_station: String,
    pub spent: String,
    pub earned: String,
    pub transaction: String,
    pub class: String,
    pub product: String,
    pub private: String,
    pub note: String,
}

impl RawRow {
    pub fn from_record(line: usize, record: &csv::StringRecord) -> Option<Self> {
        if record.len() != Column::COUNT {
            return None;
        }
        let field = |column: Column| record.get(column.index()).unwrap_or_default().to_string();
        Some(Self {
            line,
            date: field(Column::Date),
            departure_time: field(Column::DepartureTime),
            departure_station: field(Column::DepartureStation),
            arrival_time: field(Column::ArrivalTime),
            arrival_station: field(Column::ArrivalStation),
            spent: field(Column::Spent),
            earned: field(Column::Earned),
            transaction: field(Column::Transaction),
            class: field(Column::Class),
            product: field(Column::Product),
            private: field(Column::Private),
            note: field(Column::Note),
        })
    }

    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Date => &self.date,
            Column::DepartureTime => &self.departure_time,
            Column::DepartureStation => &self.departure_station,
            Column::ArrivalTime => &self.arrival_time,
            Column::ArrivalStation => &self.arrival_station,
            Column::Spent => &self.spent,
            Column::Earned => &self.earned,
            Column::Transaction => &self.transaction,
            Column::Class => &self.class,
            Column::Product => &self.product,
            Column::Private => &self.private,
            Column::Note => &self.note,
        }
    }

    /// Date, departure time and arrival time are all present.
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.departure_time.is_empty() && !self.arrival_time.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Tab => b'\t',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
            Delimiter::Tab => "\t",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Tab => f.write_str("\\t"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "," | "comma" => Ok(Delimiter::Comma),
            ";" | "semicolon" => Ok(Delimiter::Semicolon),
            "\t" | "\\t" | "tab" => Ok(Delimiter::Tab),
            other => Err(format!("unsupported delimiter '{other}'")),
        }
    }
}

/// Decoded contents of one uploaded export, header already dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelLog {
    pub file_hash: String,
    pub delimiter: Delimiter,
    pub rows: Vec<RawRow>,
}

impl TravelLog {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
