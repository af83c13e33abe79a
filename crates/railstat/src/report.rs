use std::collections::BTreeSet;

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use railstat_core::JourneySummary;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    pub file_hash: &'a str,
    pub summary: &'a JourneySummary,
    pub stations: &'a BTreeSet<String>,
}

pub fn summary_table(summary: &JourneySummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Journeys".to_string(), summary.count.to_string()]);
    table.add_row(vec![
        "Total".to_string(),
        summary.total_minutes.to_string(),
    ]);
    table.add_row(vec![
        "Average".to_string(),
        format!("{:.1}", summary.average_minutes),
    ]);
    table.add_row(vec!["Longest".to_string(), summary.max_minutes.to_string()]);
    table.add_row(vec!["Shortest".to_string(), summary.min_minutes.to_string()]);
    table
}

pub fn stations_table(stations: &BTreeSet<String>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Station"]);
    for station in stations {
        table.add_row(vec![station.as_str()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_table_lists_every_statistic() {
        let summary = JourneySummary {
            count: 3,
            total_minutes: 95,
            average_minutes: 95.0 / 3.0,
            max_minutes: 45,
            min_minutes: 20,
        };

        let rendered = summary_table(&summary).to_string();
        for expected in ["Journeys", "3", "95", "31.7", "45", "20"] {
            assert!(rendered.contains(expected), "missing {expected} in\n{rendered}");
        }
    }

    #[test]
    fn stations_table_keeps_sorted_order() {
        let stations: BTreeSet<String> = ["Utrecht Centraal", "Amsterdam Centraal"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let rendered = stations_table(&stations).to_string();
        let amsterdam = rendered.find("Amsterdam Centraal").expect("amsterdam row");
        let utrecht = rendered.find("Utrecht Centraal").expect("utrecht row");
        assert!(amsterdam < utrecht);
    }
}
