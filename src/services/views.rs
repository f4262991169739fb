//! View projections over the scoped rows.
//!
//! The time slider and the metro selection are two independent, composable
//! filters: point-in-time views (map, date label) apply the slider and ignore
//! the selection highlight; trend views apply the selection and ignore the
//! slider.

use serde::{Deserialize, Serialize};

use crate::config::NonPositivePolicy;
use crate::geo;
use crate::models::WeeklyMetroObservation;

use super::selection::Scope;

/// Point-in-time map projection.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    /// Bubble rows for the selected week
    pub rows: Vec<WeeklyMetroObservation>,
    /// Calendar date behind the slider position, when the scope has it
    pub report_date: Option<chrono::NaiveDate>,
    /// FIPS code for the scoped state's boundary highlight; `None` degrades
    /// to no highlight
    pub state_fips: Option<String>,
}

/// Map bubbles for one slider position.
///
/// Puerto Rico rows and rows with non-positive admissions are excluded here
/// and only here; both stay available to the trend and table views.
pub fn map_view(
    scoped: &[&WeeklyMetroObservation],
    scope: &Scope,
    week: usize,
) -> MapView {
    let report_date = scoped
        .iter()
        .find(|r| r.timeslider == week)
        .map(|r| r.report_date);
    let rows = scoped
        .iter()
        .filter(|r| r.timeslider == week)
        .filter(|r| r.state != "PR")
        .filter(|r| r.admissions_covid_confirmed_last_7_days > 0.0)
        .map(|r| (*r).clone())
        .collect();
    MapView {
        rows,
        report_date,
        state_fips: scope.state().and_then(|s| geo::state_fips(s).map(str::to_string)),
    }
}

/// Time-series rows for the selected metros, all weeks.
pub fn trend_view(
    scoped: &[&WeeklyMetroObservation],
    selection: &[String],
    policy: NonPositivePolicy,
) -> Vec<WeeklyMetroObservation> {
    let mut rows: Vec<WeeklyMetroObservation> = scoped
        .iter()
        .filter(|r| selection.iter().any(|c| c == &r.cbsa))
        .filter(|r| {
            policy == NonPositivePolicy::MapOnly
                || r.admissions_covid_confirmed_last_7_days > 0.0
        })
        .map(|r| (*r).clone())
        .collect();
    rows.sort_by(|a, b| a.cbsa.cmp(&b.cbsa).then(a.report_date.cmp(&b.report_date)));
    rows
}

/// One row of the display/export table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    pub cbsa: String,
    pub report_date: chrono::NaiveDate,
    pub hosp_timerange: String,
    pub admissions_covid_confirmed_last_7_days: f64,
    pub admits_100k: f64,
    pub admits_pct_change: Option<f64>,
    pub total_population_2019: f64,
    pub lat: f64,
    pub lon: f64,
}

impl From<&WeeklyMetroObservation> for TableRow {
    fn from(obs: &WeeklyMetroObservation) -> Self {
        Self {
            cbsa: obs.cbsa.clone(),
            report_date: obs.report_date,
            hosp_timerange: obs.hosp_timerange.clone(),
            admissions_covid_confirmed_last_7_days: obs.admissions_covid_confirmed_last_7_days,
            admits_100k: obs.admits_100k,
            admits_pct_change: obs.admits_pct_change,
            total_population_2019: obs.total_population_2019,
            lat: obs.lat,
            lon: obs.lon,
        }
    }
}

/// Display table for the selected metros, sorted by `cbsa` ascending then
/// `report_date` descending.
pub fn table_view(
    scoped: &[&WeeklyMetroObservation],
    selection: &[String],
    policy: NonPositivePolicy,
) -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = scoped
        .iter()
        .filter(|r| selection.iter().any(|c| c == &r.cbsa))
        .filter(|r| {
            policy == NonPositivePolicy::MapOnly
                || r.admissions_covid_confirmed_last_7_days > 0.0
        })
        .map(|r| TableRow::from(*r))
        .collect();
    rows.sort_by(|a, b| {
        a.cbsa
            .cmp(&b.cbsa)
            .then(b.report_date.cmp(&a.report_date))
    });
    rows
}

/// One slider position and its calendar date.
#[derive(Debug, Clone, Serialize)]
pub struct WeekEntry {
    pub timeslider: usize,
    pub report_date: chrono::NaiveDate,
}

/// Slider binding: maximum index and the full index-to-date mapping.
#[derive(Debug, Clone, Serialize)]
pub struct TimesliderDomain {
    pub max: usize,
    pub weeks: Vec<WeekEntry>,
}

/// The slider domain over the full (unscoped) table.
pub fn timeslider_domain(rows: &[WeeklyMetroObservation]) -> TimesliderDomain {
    let mut weeks: Vec<WeekEntry> = Vec::new();
    for row in rows {
        if !weeks.iter().any(|w| w.timeslider == row.timeslider) {
            weeks.push(WeekEntry {
                timeslider: row.timeslider,
                report_date: row.report_date,
            });
        }
    }
    weeks.sort_by_key(|w| w.timeslider);
    let max = weeks.last().map(|w| w.timeslider).unwrap_or(0);
    TimesliderDomain { max, weeks }
}
