use std::collections::{BTreeSet, HashSet};

use crate::journey::Journey;

/// Sorted set of every departure and arrival station in `journeys`.
pub fn distinct_stations(journeys: &[Journey]) -> BTreeSet<String> {
    journeys
        .iter()
        .flat_map(|journey| [&journey.departure_station, &journey.arrival_station])
        .flatten()
        .cloned()
        .collect()
}

/// Journeys whose departure and arrival stations are both selected.
pub fn filter_by_stations(journeys: &[Journey], selected: &HashSet<String>) -> Vec<Journey> {
    let is_selected =
        |station: &Option<String>| station.as_ref().is_some_and(|name| selected.contains(name));

    journeys
        .iter()
        .filter(|journey| {
            is_selected(&journey.departure_station) && is_selected(&journey.arrival_station)
        })
        .cloned()
        .collect()
}
