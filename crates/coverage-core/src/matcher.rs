//! Reconciliation of map country names with a user's visited countries.
//!
//! The map dataset and the reverse geocoder name countries differently
//! ("Dem. Rep. Congo" vs "Congo, Democratic Republic of the"). Matching is
//! best effort: exact, then normalized, then case-insensitive, then a DRC
//! special case, then a fuzzy word-overlap heuristic.

use indexmap::{IndexMap, IndexSet};

use crate::normalize::normalize_country_name;

/// Lowercased spellings that identify the Democratic Republic of the Congo.
const DRC_VARIANTS: &[&str] = &[
    "dem. rep. congo",
    "dem rep congo",
    "dr congo",
    "d.r. congo",
    "democratic republic of the congo",
    "congo, democratic republic of the",
];

/// Words ignored by the fuzzy matcher.
const STOP_WORDS: &[&str] = &["the", "of", "and", "republic"];

/// Words this short are ignored by the fuzzy matcher.
const MAX_INSIGNIFICANT_LEN: usize = 2;

/// Share of the smaller significant-word side that must overlap.
const OVERLAP_THRESHOLD: f64 = 0.7;

/// Check whether a map country name corresponds to a visited country.
pub fn is_country_visited(map_name: &str, visited: &IndexSet<String>) -> bool {
    if visited.contains(map_name) {
        return true;
    }

    let normalized = normalize_country_name(map_name);
    if visited.contains(normalized.as_str()) {
        return true;
    }

    let lower_map = map_name.trim().to_lowercase();
    let lower_normalized = normalized.trim().to_lowercase();
    for country in visited {
        if country.trim().to_lowercase() == lower_map {
            return true;
        }
        let country_normalized = normalize_country_name(country).trim().to_lowercase();
        if country_normalized == lower_map || country_normalized == lower_normalized {
            return true;
        }
    }

    if is_drc_variant(&lower_map) {
        let any_drc = visited.iter().any(|country| {
            let lower = country.to_lowercase();
            is_drc_variant(&lower)
                || (lower.contains("congo") && (lower.contains("democratic") || lower.contains("dem")))
        });
        if any_drc {
            return true;
        }
    }

    visited
        .iter()
        .any(|country| words_overlap(&lower_map, &country.trim().to_lowercase()))
}

/// Check whether a lowercased name is one of the known DRC spellings.
pub fn is_drc_variant(lower_name: &str) -> bool {
    DRC_VARIANTS.iter().any(|variant| lower_name.contains(variant))
}

/// Fuzzy word-overlap test between two lowercased, trimmed names.
///
/// Both names need at least two words. Stop words and words of two
/// characters or fewer are dropped; the remaining words of `map_name` that
/// contain, or are contained in, a word of `other` are counted and compared
/// against 70% of the smaller significant-word count.
pub fn words_overlap(map_name: &str, other: &str) -> bool {
    let map_words: Vec<&str> = map_name.split_whitespace().collect();
    let other_words: Vec<&str> = other.split_whitespace().collect();
    if map_words.len() < 2 || other_words.len() < 2 {
        return false;
    }

    let map_significant = significant_words(&map_words);
    let other_significant = significant_words(&other_words);
    if map_significant.is_empty() || other_significant.is_empty() {
        return false;
    }

    let matched = map_significant
        .iter()
        .filter(|word| {
            other_significant
                .iter()
                .any(|candidate| candidate.contains(*word) || word.contains(*candidate))
        })
        .count();

    let smaller = map_significant.len().min(other_significant.len());
    matched as f64 >= smaller as f64 * OVERLAP_THRESHOLD
}

fn significant_words<'a>(words: &[&'a str]) -> Vec<&'a str> {
    words
        .iter()
        .copied()
        .filter(|word| word.chars().count() > MAX_INSIGNIFICANT_LEN && !STOP_WORDS.contains(word))
        .collect()
}

/// Pin count for a map country name.
///
/// Tries the name itself, then its normalized form, then the first counted
/// country that matches the map name.
pub fn country_pin_count(map_name: &str, counts: &IndexMap<String, usize>) -> usize {
    if map_name.is_empty() {
        return 0;
    }
    if let Some(count) = counts.get(map_name) {
        return *count;
    }
    if let Some(count) = counts.get(normalize_country_name(map_name).as_str()) {
        return *count;
    }

    let target = IndexSet::from([map_name.to_string()]);
    counts
        .iter()
        .find(|(country, _)| is_country_visited(country, &target))
        .map(|(_, count)| *count)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visited(names: &[&str]) -> IndexSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_exact_match() {
        assert!(is_country_visited("France", &visited(&["France"])));
        assert!(!is_country_visited("France", &visited(&["Germany"])));
    }

    #[test]
    fn test_reflexive_for_any_name() {
        for name in ["France", "", "Bosnia and Herz.", "S. Sudan", "x"] {
            assert!(is_country_visited(name, &visited(&[name])), "name {name:?}");
        }
    }

    #[test]
    fn test_empty_name_without_exact_match() {
        assert!(!is_country_visited("", &visited(&["France"])));
        assert!(!is_country_visited("", &visited(&["Dem. Rep. Congo", "Central African Rep."])));
        assert!(!is_country_visited("", &IndexSet::new()));
    }

    #[test]
    fn test_blank_names_match_each_other() {
        assert_eq!(normalize_country_name(""), normalize_country_name("  "));
        assert!(is_country_visited("", &visited(&["  "])));
        assert!(is_country_visited("  ", &visited(&[""])));
    }

    #[test]
    fn test_normalized_match() {
        assert!(is_country_visited(
            "Russian Federation",
            &visited(&["Russia"])
        ));
        assert!(is_country_visited(
            "United States of America",
            &visited(&["United States"])
        ));
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(is_country_visited("france", &visited(&["France "])));
        assert!(is_country_visited("Russia", &visited(&["Russian Federation"])));
    }

    #[test]
    fn test_symmetric_under_normalization() {
        let pairs = [
            ("Kalaallit Nunaat", "Grønland"),
            ("The Bahamas", "Bahamas"),
            ("Bahamas", "The Bahamas"),
            ("Republic of Moldova", "Kingdom of Moldova"),
            ("DR Congo", "Dem Rep Congo"),
        ];
        for (a, b) in pairs {
            assert_eq!(normalize_country_name(a), normalize_country_name(b));
            assert!(is_country_visited(a, &visited(&[b])), "{a} vs {b}");
        }
    }

    #[test]
    fn test_drc_special_case() {
        assert!(is_country_visited(
            "Dem. Rep. Congo",
            &visited(&["Congo, Democratic Republic of the"])
        ));
        assert!(is_country_visited(
            "Dem. Rep. Congo",
            &visited(&["Congo (Dem. Republic)"])
        ));
        assert!(!is_country_visited("Dem. Rep. Congo", &visited(&["Congo"])));
    }

    #[test]
    fn test_drc_variant_detection() {
        assert!(is_drc_variant("dr congo"));
        assert!(is_drc_variant("the democratic republic of the congo"));
        assert!(!is_drc_variant("congo"));
    }

    #[test]
    fn test_fuzzy_overlap() {
        assert!(words_overlap("dominican rep.", "dominican republic"));
        assert!(words_overlap("central african rep.", "central african republic"));
        assert!(is_country_visited(
            "Central African Rep.",
            &visited(&["Central African Republic"])
        ));
        // Abbreviations with punctuation are not substrings of the full word.
        assert!(!words_overlap("bosnia and herz.", "bosnia and herzegovina"));
    }

    #[test]
    fn test_fuzzy_requires_two_words() {
        assert!(!words_overlap("niger", "nigeria"));
        assert!(!is_country_visited("Niger", &visited(&["Nigeria"])));
    }

    #[test]
    fn test_fuzzy_ignores_stop_words_and_short_words() {
        // Only stop words and short words remain on one side.
        assert!(!words_overlap("republic of", "republic of chad"));
        assert!(!words_overlap("el of", "el salvador"));
    }

    #[test]
    fn test_fuzzy_threshold() {
        // One of two significant words overlaps: 1 < 2 * 0.7.
        assert!(!words_overlap("south sudan", "south africa"));
        // Smaller side has one significant word which overlaps: 1 >= 0.7.
        assert!(words_overlap("sudan south", "republic of sudan"));
    }

    #[test]
    fn test_pin_count_lookup() {
        let mut counts = IndexMap::new();
        counts.insert("Russia".to_string(), 4);
        counts.insert("Congo, Democratic Republic of the".to_string(), 2);
        counts.insert("Dominican Republic".to_string(), 1);

        assert_eq!(country_pin_count("Russia", &counts), 4);
        assert_eq!(country_pin_count("Russian Federation", &counts), 4);
        assert_eq!(country_pin_count("Dem. Rep. Congo", &counts), 2);
        assert_eq!(country_pin_count("Dominican Rep.", &counts), 1);
        assert_eq!(country_pin_count("Peru", &counts), 0);
        assert_eq!(country_pin_count("", &counts), 0);
    }
}
