//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// How the non-positive-admissions exclusion is applied across views.
///
/// The map view always drops rows with zero or negative admissions to avoid
/// degenerate bubble sizing. Whether the trend and table views do the same is
/// a policy choice, not a fixed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonPositivePolicy {
    /// Exclude non-positive rows from the map view only (default).
    MapOnly,
    /// Exclude non-positive rows from every view.
    AllViews,
}

impl NonPositivePolicy {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "map_only" | "map" | "" => Ok(Self::MapOnly),
            "all_views" | "all" => Ok(Self::AllViews),
            other => Err(format!(
                "Unsupported CBSA_NONPOSITIVE_POLICY '{}'. Use map_only or all_views.",
                other
            )),
        }
    }
}

/// Parameters for picking the default metro selection.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    /// Maximum number of metros in the default selection.
    pub default_metro_limit: usize,
    /// Minimum admissions for a metro to be a national default candidate.
    /// Keeps the national default away from the noisy long tail.
    pub national_admissions_floor: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_metro_limit: 10,
            national_admissions_floor: 1000.0,
        }
    }
}

/// Bounds for the prepared-dataset memoization cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of retained entries.
    pub max_entries: usize,
    /// Maximum entry age before recompute.
    pub max_age: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 8,
            max_age: Duration::from_secs(3600),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the weekly CBSA time-series CSV
    pub dataset_path: String,
    /// Path to the data-sources manifest CSV
    pub sources_path: String,
    /// Default-selection parameters
    pub selection: SelectionConfig,
    /// Where the non-positive-admissions exclusion applies
    pub nonpositive_policy: NonPositivePolicy,
    /// Prepared-dataset cache bounds
    pub cache: CacheConfig,
    /// Maximum age for cached reference topology
    pub shapes_max_age: Duration,
}

impl AppConfig {
    /// Create a new configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CBSA_DATA_PATH` (optional, default: `cbsa_timeseries.csv`)
    /// - `CBSA_SOURCES_PATH` (optional, default: `data_sources.csv`)
    /// - `CBSA_DEFAULT_METRO_LIMIT` (optional, default: 10)
    /// - `CBSA_NATIONAL_ADMISSIONS_FLOOR` (optional, default: 1000)
    /// - `CBSA_NONPOSITIVE_POLICY` (optional): `map_only` | `all_views`
    /// - `CBSA_CACHE_MAX_ENTRIES` (optional, default: 8)
    /// - `CBSA_CACHE_MAX_AGE_SECS` (optional, default: 3600)
    /// - `CBSA_SHAPES_MAX_AGE_SECS` (optional, default: 86400)
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, String> {
        let dataset_path =
            env::var("CBSA_DATA_PATH").unwrap_or_else(|_| "cbsa_timeseries.csv".to_string());
        let sources_path =
            env::var("CBSA_SOURCES_PATH").unwrap_or_else(|_| "data_sources.csv".to_string());

        let default_metro_limit = env::var("CBSA_DEFAULT_METRO_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| "CBSA_DEFAULT_METRO_LIMIT must be a non-negative integer".to_string())?;
        let national_admissions_floor = env::var("CBSA_NATIONAL_ADMISSIONS_FLOOR")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .map_err(|_| "CBSA_NATIONAL_ADMISSIONS_FLOOR must be a number".to_string())?;

        let nonpositive_policy =
            NonPositivePolicy::parse(&env::var("CBSA_NONPOSITIVE_POLICY").unwrap_or_default())?;

        let max_entries = env::var("CBSA_CACHE_MAX_ENTRIES")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .map_err(|_| "CBSA_CACHE_MAX_ENTRIES must be a positive integer".to_string())?;
        let max_age_secs: u64 = env::var("CBSA_CACHE_MAX_AGE_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .map_err(|_| "CBSA_CACHE_MAX_AGE_SECS must be a number of seconds".to_string())?;
        let shapes_max_age_secs: u64 = env::var("CBSA_SHAPES_MAX_AGE_SECS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .map_err(|_| "CBSA_SHAPES_MAX_AGE_SECS must be a number of seconds".to_string())?;

        Ok(Self {
            dataset_path,
            sources_path,
            selection: SelectionConfig {
                default_metro_limit,
                national_admissions_floor,
            },
            nonpositive_policy,
            cache: CacheConfig {
                max_entries,
                max_age: Duration::from_secs(max_age_secs),
            },
            shapes_max_age: Duration::from_secs(shapes_max_age_secs),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: "cbsa_timeseries.csv".to_string(),
            sources_path: "data_sources.csv".to_string(),
            selection: SelectionConfig::default(),
            nonpositive_policy: NonPositivePolicy::MapOnly,
            cache: CacheConfig::default(),
            shapes_max_age: Duration::from_secs(86400),
        }
    }
}
