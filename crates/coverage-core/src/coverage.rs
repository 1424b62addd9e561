//! Folding pins into visited countries and a ranking list.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::pin::Pin;
use crate::resolver::{CountryLookup, CountryResolver};

/// Number of UN-recognized countries used as the coverage denominator.
pub const TOTAL_COUNTRIES: usize = 195;

/// One row of the per-country ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryListEntry {
    pub name: String,
    pub pin_count: usize,
}

/// Coverage derived from a user's pins.
///
/// Always rebuilt from scratch; `visited_countries` and the keys of
/// `country_counts` are the same set, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageData {
    pub visited_countries: IndexSet<String>,
    pub country_counts: IndexMap<String, usize>,
    pub country_list: Vec<CountryListEntry>,
    pub total_visited: usize,
}

impl CoverageData {
    /// Resolve each pin and tally the countries.
    ///
    /// Pins without usable coordinates, or that resolve to no country,
    /// contribute nothing.
    pub fn from_pins<L: CountryLookup>(pins: &[Pin], resolver: &CountryResolver<L>) -> Self {
        Self::from_country_names(pins.iter().filter_map(|pin| resolver.resolve_pin(pin)).map(|c| c.name))
    }

    /// Tally already-resolved country names.
    pub fn from_country_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut visited_countries = IndexSet::new();
        let mut country_counts: IndexMap<String, usize> = IndexMap::new();

        for name in names {
            visited_countries.insert(name.clone());
            *country_counts.entry(name).or_insert(0) += 1;
        }

        let mut country_list: Vec<CountryListEntry> = visited_countries
            .iter()
            .map(|name| CountryListEntry {
                name: name.clone(),
                pin_count: country_counts.get(name).copied().unwrap_or(0),
            })
            .collect();
        // Stable: ties keep first-seen order.
        country_list.sort_by(|a, b| b.pin_count.cmp(&a.pin_count));

        Self {
            total_visited: visited_countries.len(),
            visited_countries,
            country_counts,
            country_list,
        }
    }

    /// Percentage of [`TOTAL_COUNTRIES`] visited, rounded.
    pub fn coverage_percentage(&self) -> u32 {
        coverage_percentage(self.total_visited)
    }

    pub fn is_empty(&self) -> bool {
        self.total_visited == 0
    }
}

/// `round(visited / 195 * 100)`.
pub fn coverage_percentage(total_visited: usize) -> u32 {
    (total_visited as f64 / TOTAL_COUNTRIES as f64 * 100.0).round() as u32
}
