use crate::model::RawRow;

/// Keeps, in order, the rows that carry a date and both times.
pub fn filter_complete_rows(rows: Vec<RawRow>) -> Vec<RawRow> {
    rows.into_iter().filter(RawRow::is_complete).collect()
}
