use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use coverage_core::{CountryIndex, CountryResolver};
use serde::Serialize;
use tracing::{debug, info, warn};
use worldmappin_client::{GeometrySource, PinSource, ProfileSource};

use crate::views::{
    load_coverage, load_profile, load_user_pins, CoverageView, MapView, PinsView, ProfileView,
};

/// Longest account name the chain allows.
const MAX_USERNAME_LEN: usize = 16;

#[derive(Clone)]
pub struct AppState {
    pub pins: Arc<dyn PinSource>,
    pub profiles: Arc<dyn ProfileSource>,
    /// Countries drawn on the coverage map.
    pub map: Arc<CountryIndex>,
    /// Detailed boundaries pins are resolved against.
    pub resolver: CountryResolver<Arc<CountryIndex>>,
}

impl AppState {
    pub fn new(
        pins: Arc<dyn PinSource>,
        profiles: Arc<dyn ProfileSource>,
        map: CountryIndex,
        lookup: CountryIndex,
    ) -> Self {
        Self {
            pins,
            profiles,
            map: Arc::new(map),
            resolver: CountryResolver::new(Arc::new(lookup)),
        }
    }

    /// Load both geometry datasets.
    ///
    /// A failed map load leaves the map empty (`/map` answers 503). A failed
    /// lookup load falls back to the map polygons, then to an empty index, in
    /// which case only the Greenland override resolves.
    pub async fn load(
        pins: Arc<dyn PinSource>,
        profiles: Arc<dyn ProfileSource>,
        map_source: &dyn GeometrySource,
        lookup_source: &dyn GeometrySource,
    ) -> Self {
        let (map, lookup) = tokio::join!(
            map_source.load_country_geometry(),
            lookup_source.load_country_geometry()
        );

        let map = match map {
            Ok(index) => {
                info!(countries = index.len(), "Loaded map geometry");
                index
            }
            Err(err) => {
                warn!(error = %err, "Failed to load map geometry; coverage map disabled");
                CountryIndex::default()
            }
        };

        let lookup = match lookup {
            Ok(index) => {
                info!(countries = index.len(), "Loaded lookup geometry");
                index
            }
            Err(err) => {
                warn!(error = %err, "Failed to load lookup geometry; resolving against map geometry");
                map.clone()
            }
        };

        Self::new(pins, profiles, map, lookup)
    }
}

#[derive(Debug, Serialize)]
struct Health {
    status: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/users/:username/profile", get(profile))
        .route("/api/users/:username/coverage", get(coverage))
        .route("/api/users/:username/map", get(coverage_map))
        .route("/api/users/:username/pins", get(user_pins))
        .with_state(state)
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

/// A name that cannot be a Hive account renders as "User not found".
async fn profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Json<ProfileView> {
    if validate_username(&username).is_err() {
        debug!("Malformed username treated as not found: {:?}", username);
        return Json(ProfileView::not_found(&username));
    }
    Json(load_profile(&username, state.profiles.as_ref(), state.pins.as_ref()).await)
}

async fn coverage(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<CoverageView>, ApiError> {
    validate_username(&username)?;
    let user = load_coverage(&username, state.pins.as_ref(), &state.resolver).await;
    debug!(
        username = %username,
        pins = user.total_pins(),
        visited = user.coverage.total_visited,
        "Derived coverage"
    );
    Ok(Json(CoverageView::new(&username, &user)))
}

async fn coverage_map(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<MapView>, ApiError> {
    validate_username(&username)?;
    if state.map.is_empty() {
        return Err(ApiError::GeometryUnavailable);
    }
    let user = load_coverage(&username, state.pins.as_ref(), &state.resolver).await;
    Ok(Json(MapView::new(&username, &user, &state.map)))
}

async fn user_pins(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<PinsView>, ApiError> {
    validate_username(&username)?;
    let pins = load_user_pins(&username, state.pins.as_ref()).await;
    Ok(Json(PinsView::new(&username, pins)))
}

fn validate_username(username: &str) -> Result<(), ApiError> {
    let valid = !username.is_empty()
        && username.len() <= MAX_USERNAME_LEN
        && username
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ApiError::InvalidUsername(username.to_string()))
    }
}

#[derive(Debug)]
pub enum ApiError {
    InvalidUsername(String),
    GeometryUnavailable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidUsername(username) => {
                warn!("Rejected invalid username: {:?}", username);
                let body = serde_json::json!({
                    "error": {
                        "message": format!("Invalid username: {}", username),
                        "type": "invalid_request"
                    }
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::GeometryUnavailable => {
                let body = serde_json::json!({
                    "error": {
                        "message": "Country geometry is not loaded",
                        "type": "unavailable"
                    }
                });
                (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
            }
        }
    }
}
