// ABOUTME: Nominatim (OpenStreetMap) reverse geocoding into neighbourhood-level place names
// ABOUTME: Prefers the most specific locality and adds the city when it differs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafeSpace Health

use crate::core::{Coordinates, ReverseGeocoder};
use crate::error::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

const SERVICE: &str = "Nominatim";

/// Default Nominatim host
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Reverse geocoding payload (`format=jsonv2`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReversePlace {
    /// Full comma-separated place description
    #[serde(default)]
    pub display_name: Option<String>,
    /// Structured address parts
    #[serde(default)]
    pub address: Option<ReverseAddress>,
}

/// Address parts used for naming, most specific first
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(missing_docs)]
pub struct ReverseAddress {
    pub suburb: Option<String>,
    pub neighbourhood: Option<String>,
    pub quarter: Option<String>,
    pub hamlet: Option<String>,
    pub residential: Option<String>,
    pub city_district: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub municipality: Option<String>,
}

fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// Build a display name such as "Goregaon East, Mumbai"
///
/// Returns `None` when the payload has no address block, or when neither the
/// address nor the first segment of `display_name` yields a name.
#[must_use]
pub fn format_locality(place: &ReversePlace) -> Option<String> {
    let address = place.address.as_ref()?;

    let locality = first_present(&[
        &address.suburb,
        &address.neighbourhood,
        &address.quarter,
        &address.hamlet,
        &address.residential,
        &address.city_district,
    ]);
    let city = first_present(&[
        &address.city,
        &address.town,
        &address.village,
        &address.municipality,
    ]);

    let mut parts: Vec<&str> = Vec::with_capacity(2);
    if let Some(locality) = locality {
        parts.push(locality);
    }
    if let Some(city) = city {
        if Some(city) != locality {
            parts.push(city);
        }
    }

    if !parts.is_empty() {
        return Some(parts.join(", "));
    }

    place
        .display_name
        .as_deref()
        .and_then(|name| name.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Nominatim reverse geocoding client
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
    enabled: bool,
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NominatimClient {
    /// Client against the public Nominatim host
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_BASE_URL.to_owned(), true)
    }

    /// Client with a custom host and enablement flag
    #[must_use]
    pub fn with_config(base_url: String, enabled: bool) -> Self {
        Self {
            client: shared_client().clone(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            enabled,
        }
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    #[instrument(
        skip(self),
        fields(
            service = "nominatim",
            api_call = "reverse_geocode",
            lat = %at.latitude,
            lon = %at.longitude,
        )
    )]
    async fn locality_name(&self, at: Coordinates) -> ProviderResult<String> {
        if !self.enabled {
            return Err(ProviderError::Disabled(SERVICE));
        }

        let url = format!(
            "{}/reverse?format=jsonv2&lat={}&lon={}&zoom=18&addressdetails=1",
            self.base_url, at.latitude, at.longitude
        );
        debug!("Reverse geocoding via: {url}");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::ApiError {
                service: SERVICE,
                message: format!("reverse geocoding returned status {}", response.status()),
            });
        }

        let place: ReversePlace = response.json().await?;
        format_locality(&place).ok_or_else(|| ProviderError::NotFound {
            service: SERVICE,
            query: format!("{},{}", at.latitude, at.longitude),
        })
    }
}
