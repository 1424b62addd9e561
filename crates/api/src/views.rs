//! View models for the profile page.
//!
//! Source failures never escape from here: a missing or unreachable profile
//! becomes a `not_found` / `error` view, and a failed pin fetch becomes an
//! empty pin list with empty coverage.

use coverage_core::{
    coverage_summary, display_username, shade_map, CountryIndex, CountryListEntry, CountryLookup,
    CountryResolver, CountryShade, CoverageData, Pin, TOTAL_COUNTRIES,
};
use serde::Serialize;
use tracing::{debug, error};
use worldmappin_client::{ClientError, PinSource, ProfileSource};

/// Avatar shown when the account has none.
pub const DEFAULT_PROFILE_PICTURE: &str = "/images/worldmappin-logo.png";

/// Outcome of a profile lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Found,
    NotFound,
    Error,
}

/// Header card of the profile page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub username: String,
    pub display_username: String,
    pub status: ProfileStatus,
    pub exists: bool,
    pub name: String,
    pub about: String,
    pub location: String,
    pub website: String,
    pub profile_picture: String,
    pub pin_count: u64,
    pub rank: Option<u64>,
}

impl ProfileView {
    fn unavailable(username: &str, status: ProfileStatus, name: &str, about: &str) -> Self {
        Self {
            username: username.to_string(),
            display_username: display_username(username),
            status,
            exists: false,
            name: name.to_string(),
            about: about.to_string(),
            location: String::new(),
            website: String::new(),
            profile_picture: DEFAULT_PROFILE_PICTURE.to_string(),
            pin_count: 0,
            rank: Some(0),
        }
    }

    pub fn not_found(username: &str) -> Self {
        Self::unavailable(username, ProfileStatus::NotFound, "User not found", "")
    }

    pub fn error(username: &str) -> Self {
        Self::unavailable(
            username,
            ProfileStatus::Error,
            "Error loading profile",
            "There was an error loading this user profile.",
        )
    }
}

/// Load the profile card.
///
/// The account lookup and the pin stats request run concurrently; pin count
/// and rank come from the single stats response.
pub async fn load_profile(
    username: &str,
    profiles: &dyn ProfileSource,
    pins: &dyn PinSource,
) -> ProfileView {
    match try_load_profile(username, profiles, pins).await {
        Ok(view) => view,
        Err(e) => {
            error!("Error fetching user profile {}: {}", username, e);
            ProfileView::error(username)
        }
    }
}

async fn try_load_profile(
    username: &str,
    profiles: &dyn ProfileSource,
    pins: &dyn PinSource,
) -> Result<ProfileView, ClientError> {
    let (hive, stats) = tokio::join!(profiles.fetch_profile(username), pins.user_stats(username));

    let hive = hive?;
    if !hive.exists {
        debug!("Profile not found: {}", username);
        return Ok(ProfileView::not_found(username));
    }
    let stats = stats?;

    let profile = hive.profile.unwrap_or_default();

    Ok(ProfileView {
        username: username.to_string(),
        display_username: display_username(username),
        status: ProfileStatus::Found,
        exists: true,
        name: non_empty(profile.name).unwrap_or_else(|| username.to_string()),
        about: non_empty(profile.about).unwrap_or_else(|| "No description available".to_string()),
        location: non_empty(profile.location)
            .unwrap_or_else(|| "Location not specified".to_string()),
        website: non_empty(profile.website)
            .unwrap_or_else(|| format!("https://peakd.com/@{}", username)),
        profile_picture: non_empty(hive.profile_picture)
            .unwrap_or_else(|| DEFAULT_PROFILE_PICTURE.to_string()),
        pin_count: stats.pin_count,
        rank: stats.rank,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A user's pins and the coverage derived from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserCoverage {
    pub pins: Vec<Pin>,
    pub coverage: CoverageData,
}

impl UserCoverage {
    /// Every fetched pin, including ones that resolved to no country.
    pub fn total_pins(&self) -> usize {
        self.pins.len()
    }
}

/// Fetch a user's pins. A failed fetch is logged and treated as no pins.
pub async fn load_user_pins(username: &str, pins: &dyn PinSource) -> Vec<Pin> {
    match pins.fetch_user_pins(username).await {
        Ok(pins) => pins,
        Err(e) => {
            error!("Error loading user pins for {}: {}", username, e);
            Vec::new()
        }
    }
}

/// Fetch a user's pins and derive coverage.
pub async fn load_coverage<L: CountryLookup>(
    username: &str,
    pins: &dyn PinSource,
    resolver: &CountryResolver<L>,
) -> UserCoverage {
    let pins = load_user_pins(username, pins).await;
    let coverage = CoverageData::from_pins(&pins, resolver);
    UserCoverage { pins, coverage }
}

/// Coverage headline, totals and country ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageView {
    pub username: String,
    pub summary: String,
    pub total_pins: usize,
    pub total_visited: usize,
    pub total_countries: usize,
    pub coverage_percentage: u32,
    pub countries: Vec<CountryListEntry>,
}

impl CoverageView {
    pub fn new(username: &str, user: &UserCoverage) -> Self {
        let coverage = &user.coverage;
        Self {
            username: username.to_string(),
            summary: coverage_summary(username, coverage),
            total_pins: user.total_pins(),
            total_visited: coverage.total_visited,
            total_countries: TOTAL_COUNTRIES,
            coverage_percentage: coverage.coverage_percentage(),
            countries: coverage.country_list.clone(),
        }
    }
}

/// Shading for every country on the coverage map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub username: String,
    pub total_pins: usize,
    pub total_visited: usize,
    pub coverage_percentage: u32,
    pub countries: Vec<CountryShade>,
}

impl MapView {
    pub fn new(username: &str, user: &UserCoverage, map: &CountryIndex) -> Self {
        let coverage = &user.coverage;
        Self {
            username: username.to_string(),
            total_pins: user.total_pins(),
            total_visited: coverage.total_visited,
            coverage_percentage: coverage.coverage_percentage(),
            countries: shade_map(map.names(), coverage),
        }
    }
}

/// The user's post list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinsView {
    pub username: String,
    pub total_pins: usize,
    pub pins: Vec<Pin>,
}

impl PinsView {
    pub fn new(username: &str, pins: Vec<Pin>) -> Self {
        Self {
            username: username.to_string(),
            total_pins: pins.len(),
            pins,
        }
    }
}
