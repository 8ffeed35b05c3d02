//! The "current position" capability.
//!
//! The dashboard is server-rendered, so the position comes from an IP
//! geolocation service instead of a browser API. The capability sits behind
//! a trait: denial and unavailability stay distinguishable, and tests can
//! substitute a scripted locator.

use async_trait::async_trait;
use serde::Deserialize;

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// Input-field representation, 6 decimal places.
    pub fn display_latitude(&self) -> String {
        format!("{:.6}", self.latitude)
    }

    pub fn display_longitude(&self) -> String {
        format!("{:.6}", self.longitude)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeolocationError {
    #[error("location access was denied or unavailable: {0}")]
    Denied(String),

    #[error("the geolocation service is unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
}

#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Resolves the current position. Single shot, no retry.
    async fn current_position(&self) -> StdResult<Position, GeolocationError>;
}

/// Resolves the dashboard host's position through an `ip-api.com`-style service.
pub struct IpApiLocator {
    client: reqwest::Client,
    base_url: String,
}

impl IpApiLocator {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(StdDuration::from_secs(5))
                .build()?,
            base_url: base_url.into(),
        })
    }
}

#[derive(Deserialize)]
struct IpApiResponse {
    status: String,

    #[serde(default)]
    message: String,

    #[serde(default)]
    lat: f64,

    #[serde(default)]
    lon: f64,
}

#[async_trait]
impl Geolocator for IpApiLocator {
    #[instrument(skip_all)]
    async fn current_position(&self) -> StdResult<Position, GeolocationError> {
        let response: IpApiResponse = self
            .client
            .get(format!("{}/json", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if response.status != "success" {
            return Err(GeolocationError::Denied(response.message));
        }
        Ok(Position {
            latitude: response.lat,
            longitude: response.lon,
        })
    }
}
