//! Country name canonicalization.
//!
//! Reverse geocoders tend to return official or legal names while the map
//! dataset uses common names. [`normalize_country_name`] bridges the two.

/// Known official-name aliases and the common name the map dataset uses.
pub const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("United States of America", "United States"),
    (
        "United Kingdom of Great Britain and Northern Ireland",
        "United Kingdom",
    ),
    ("Russian Federation", "Russia"),
    ("Republic of Korea", "South Korea"),
    ("Democratic People's Republic of Korea", "North Korea"),
    ("People's Republic of China", "China"),
    ("Islamic Republic of Iran", "Iran"),
    ("Syrian Arab Republic", "Syria"),
    ("Lao People's Democratic Republic", "Laos"),
    ("Myanmar", "Myanmar"),
    ("The Bahamas", "Bahamas"),
    ("The Gambia", "Gambia"),
    ("Republic of the Congo", "Congo"),
    (
        "Democratic Republic of the Congo",
        "Congo, Democratic Republic of the",
    ),
    ("Dem. Rep. Congo", "Congo, Democratic Republic of the"),
    ("Dem Rep Congo", "Congo, Democratic Republic of the"),
    ("DR Congo", "Congo, Democratic Republic of the"),
    ("D.R. Congo", "Congo, Democratic Republic of the"),
    ("Republic of Moldova", "Moldova"),
    ("Republic of the Philippines", "Philippines"),
    ("United Republic of Tanzania", "Tanzania"),
    ("Bolivarian Republic of Venezuela", "Venezuela"),
    ("Kalaallit Nunaat", "Greenland"),
    ("Grønland", "Greenland"),
];

/// Leading qualifiers stripped case-insensitively, each at most once, in order.
const STRIPPED_PREFIXES: &[&str] = &["Republic of ", "Kingdom of ", "State of ", "The "];

/// Trailing qualifiers stripped case-sensitively, each at most once, in order.
const STRIPPED_SUFFIXES: &[&str] = &[" of America", " of Great Britain and Northern Ireland"];

/// Normalize a country name to the form used by the map dataset.
///
/// The alias table is consulted first with an exact match. Otherwise each
/// prefix and suffix rule is applied once and the result is trimmed.
pub fn normalize_country_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    if let Some((_, canonical)) = COUNTRY_ALIASES.iter().find(|(alias, _)| *alias == name) {
        return canonical.to_string();
    }

    let mut rest = name;
    for prefix in STRIPPED_PREFIXES {
        rest = strip_prefix_ignore_ascii_case(rest, prefix);
    }
    for suffix in STRIPPED_SUFFIXES {
        rest = rest.strip_suffix(suffix).unwrap_or(rest);
    }

    rest.trim().to_string()
}

fn strip_prefix_ignore_ascii_case<'a>(value: &'a str, prefix: &str) -> &'a str {
    match value.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &value[prefix.len()..],
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_table_entries() {
        for (alias, canonical) in COUNTRY_ALIASES {
            assert_eq!(normalize_country_name(alias), *canonical, "alias {alias}");
        }
    }

    #[test]
    fn test_prefix_stripping() {
        assert_eq!(normalize_country_name("Republic of Fiji"), "Fiji");
        assert_eq!(normalize_country_name("Kingdom of Spain"), "Spain");
        assert_eq!(normalize_country_name("State of Palestine"), "Palestine");
        assert_eq!(normalize_country_name("The Netherlands"), "Netherlands");
        assert_eq!(normalize_country_name("kingdom of norway"), "norway");
    }

    #[test]
    fn test_prefixes_apply_in_order_once() {
        // "Republic of" is checked before "The ", so it is still present afterwards.
        assert_eq!(
            normalize_country_name("The Republic of Somewhere"),
            "Republic of Somewhere"
        );
        assert_eq!(
            normalize_country_name("Republic of The Gambia"),
            "Gambia"
        );
    }

    #[test]
    fn test_suffix_stripping() {
        assert_eq!(normalize_country_name("States of America"), "States");
        assert_eq!(
            normalize_country_name("Kingdom of Atlantis of America"),
            "Atlantis"
        );
        // Suffixes are case-sensitive.
        assert_eq!(
            normalize_country_name("Federated States OF AMERICA"),
            "Federated States OF AMERICA"
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_country_name("  France "), "France");
    }

    #[test]
    fn test_empty_and_non_ascii() {
        assert_eq!(normalize_country_name(""), "");
        assert_eq!(normalize_country_name("Côte d'Ivoire"), "Côte d'Ivoire");
        assert_eq!(normalize_country_name("Ísland"), "Ísland");
    }

    #[test]
    fn test_idempotent_on_canonical_forms() {
        for (_, canonical) in COUNTRY_ALIASES {
            let once = normalize_country_name(canonical);
            assert_eq!(normalize_country_name(&once), once);
        }
        for name in ["France", "Germany", "United States", "Bosnia and Herz."] {
            let once = normalize_country_name(name);
            assert_eq!(normalize_country_name(&once), once);
        }
    }
}
