//! Data Transfer Objects for the HTTP API.
//!
//! The view projections themselves already derive Serialize and are returned
//! as-is; the types here cover requests and the thin response envelopes.

use serde::{Deserialize, Serialize};

pub use crate::services::views::{MapView, TableRow, TimesliderDomain, WeekEntry};

/// Query parameters for scope-only endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScopeQuery {
    /// State postal code; absent or "All USA" means the national view
    #[serde(default)]
    pub state: Option<String>,
}

/// Query parameters for the map endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapQuery {
    #[serde(default)]
    pub state: Option<String>,
    /// Timeslider index; defaults to the latest week
    #[serde(default)]
    pub week: Option<usize>,
}

/// Request body for the trend, table, and export endpoints.
///
/// Metro names contain commas, so the selection travels as a JSON array
/// rather than a delimited query parameter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewRequest {
    #[serde(default)]
    pub state: Option<String>,
    /// Selected metros; empty means the scope-dependent default
    #[serde(default)]
    pub cbsas: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Checksum of the loaded dataset
    pub dataset_checksum: String,
    /// Number of prepared observations
    pub observations: usize,
}

/// State selector options, sentinel first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatesResponse {
    pub states: Vec<String>,
}

/// Metro list for the multiselect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetrosResponse {
    pub metros: Vec<String>,
    pub total: usize,
}

/// Default metro selection for the scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsResponse {
    pub cbsa_init: Vec<String>,
}
