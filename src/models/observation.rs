//! Row types for the weekly CBSA admissions time series.

use serde::{Deserialize, Serialize};

/// One row of the raw time-series CSV, before derivation.
///
/// Field types are strict on purpose: a column that fails its declared type
/// surfaces as a load error instead of silently becoming a null. The report
/// date is optional only because upstream occasionally ships rows with an
/// empty date; the loader drops those.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawObservation {
    pub cbsa: String,
    #[serde(with = "super::dates::ymd_opt")]
    pub report_date: Option<chrono::NaiveDate>,
    /// Reporting-window label. Either pre-extracted ("Aug 6 - Aug 12") or the
    /// raw upstream form with the range in parentheses.
    pub hosp_timerange: String,
    pub admissions_covid_confirmed_last_7_days: f64,
    pub admits_100k: f64,
    /// Week-over-week fractional change, precomputed upstream. Absent in
    /// older dataset builds.
    #[serde(default)]
    pub admits_pct_change: Option<f64>,
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    pub total_population_2019: f64,
}

/// One display-ready row per (metro area, report date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyMetroObservation {
    /// Full CBSA name, e.g. "New York-Newark-Jersey City, NY-NJ-PA"
    pub cbsa: String,
    /// Text before the first comma of `cbsa`, trimmed
    pub cbsa_short: String,
    pub report_date: chrono::NaiveDate,
    /// Human-readable label for the 7-day reporting window
    pub hosp_timerange: String,
    pub admissions_covid_confirmed_last_7_days: f64,
    /// Admissions per 100k population, precomputed upstream
    pub admits_100k: f64,
    pub admits_pct_change: Option<f64>,
    /// Two-letter state/territory postal code
    pub state: String,
    /// Representative point for the CBSA shape, not a centroid
    pub lat: f64,
    pub lon: f64,
    pub total_population_2019: f64,
    /// Dense 0-based rank of `report_date` among all distinct report dates
    pub timeslider: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_observation_roundtrips_through_json() {
        let raw = RawObservation {
            cbsa: "Bluffton, IN".to_string(),
            report_date: chrono::NaiveDate::from_ymd_opt(2021, 8, 14),
            hosp_timerange: "(Aug 6 - Aug 12)".to_string(),
            admissions_covid_confirmed_last_7_days: 12.0,
            admits_100k: 4.2,
            admits_pct_change: Some(-0.25),
            state: "IN".to_string(),
            lat: 0.0,
            lon: 0.0,
            total_population_2019: 70000.0,
        };
        let json = serde_json::to_string(&raw).unwrap();
        let back: RawObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cbsa, raw.cbsa);
        assert_eq!(back.report_date, raw.report_date);
        assert_eq!(back.admits_pct_change, Some(-0.25));
    }

    #[test]
    fn test_observation_serializes_date_as_ymd() {
        let obs = WeeklyMetroObservation {
            cbsa: "Bluffton, IN".to_string(),
            cbsa_short: "Bluffton".to_string(),
            report_date: chrono::NaiveDate::from_ymd_opt(2021, 8, 14).unwrap(),
            hosp_timerange: "Aug 6 - Aug 12".to_string(),
            admissions_covid_confirmed_last_7_days: 12.0,
            admits_100k: 4.2,
            admits_pct_change: None,
            state: "IN".to_string(),
            lat: 40.7,
            lon: -85.2,
            total_population_2019: 70000.0,
            timeslider: 3,
        };
        let json = serde_json::to_value(&obs).unwrap();
        assert_eq!(json["report_date"], "2021-08-14");
        assert_eq!(json["timeslider"], 3);
    }
}
