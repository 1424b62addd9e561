//! Per-country shading for the coverage map.

use serde::{Deserialize, Serialize};

use crate::coverage::CoverageData;
use crate::matcher::{country_pin_count, is_country_visited};

/// How a single map country is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryShade {
    pub name: String,
    pub visited: bool,
    pub pin_count: usize,
    pub tooltip: String,
}

impl CountryShade {
    /// Shade a map country against the user's coverage.
    pub fn new(map_name: &str, coverage: &CoverageData) -> Self {
        let visited = is_country_visited(map_name, &coverage.visited_countries);
        let pin_count = country_pin_count(map_name, &coverage.country_counts);
        Self {
            name: map_name.to_string(),
            visited,
            pin_count,
            tooltip: tooltip(map_name, visited, pin_count),
        }
    }
}

/// Shade every map country, in map order.
pub fn shade_map<'a, I>(map_names: I, coverage: &CoverageData) -> Vec<CountryShade>
where
    I: IntoIterator<Item = &'a str>,
{
    map_names
        .into_iter()
        .map(|name| CountryShade::new(name, coverage))
        .collect()
}

fn tooltip(name: &str, visited: bool, pin_count: usize) -> String {
    if !visited {
        return name.to_string();
    }
    let unit = if pin_count == 1 { "pin" } else { "pins" };
    format!("{}: {} {}", name, pin_count, unit)
}

/// Username with its first character uppercased.
pub fn display_username(username: &str) -> String {
    let mut chars = username.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Headline sentence of the coverage section.
pub fn coverage_summary(username: &str, coverage: &CoverageData) -> String {
    format!(
        "{} has visited {} countries, covering {}% of the world!",
        display_username(username),
        coverage.total_visited,
        coverage.coverage_percentage()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage(names: &[&str]) -> CoverageData {
        CoverageData::from_country_names(names.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_shade_visited_and_unvisited() {
        let coverage = coverage(&["France", "France", "Russia", "Congo, Democratic Republic of the"]);
        let shades = shade_map(
            ["France", "Russian Federation", "Dem. Rep. Congo", "Spain"],
            &coverage,
        );

        assert_eq!(shades[0].tooltip, "France: 2 pins");
        assert!(shades[1].visited);
        assert_eq!(shades[1].pin_count, 1);
        assert_eq!(shades[1].tooltip, "Russian Federation: 1 pin");
        assert!(shades[2].visited);
        assert_eq!(shades[2].pin_count, 1);
        assert!(!shades[3].visited);
        assert_eq!(shades[3].pin_count, 0);
        assert_eq!(shades[3].tooltip, "Spain");
    }

    #[test]
    fn test_display_username() {
        assert_eq!(display_username("alice"), "Alice");
        assert_eq!(display_username("éva"), "Éva");
        assert_eq!(display_username(""), "");
    }

    #[test]
    fn test_coverage_summary() {
        let coverage = coverage(&["Japan", "Chile"]);
        assert_eq!(
            coverage_summary("bob", &coverage),
            "Bob has visited 2 countries, covering 1% of the world!"
        );
    }
}
