//! Derivation of the display-ready table from raw rows.
//!
//! Pure and deterministic given its input: safe to memoize keyed on the raw
//! dataset's checksum, and idempotent when re-applied to its own output.

use std::collections::{BTreeSet, HashMap};

use crate::data::patches;
use crate::models::{RawObservation, WeeklyMetroObservation};

/// Derive display rows from raw rows.
///
/// Computes the `timeslider` index over the distinct sorted report dates of
/// the whole input. The slider index is deliberately global: it is computed
/// before any state filtering so that index N means the same week whichever
/// state is selected, even where a state's reporting is sparser.
pub fn derive(raw: &[RawObservation]) -> Vec<WeeklyMetroObservation> {
    let distinct_dates: BTreeSet<chrono::NaiveDate> =
        raw.iter().filter_map(|r| r.report_date).collect();
    let timeslider_index: HashMap<chrono::NaiveDate, usize> = distinct_dates
        .into_iter()
        .enumerate()
        .map(|(i, date)| (date, i))
        .collect();

    raw.iter()
        .filter_map(|r| {
            let report_date = r.report_date?;
            let mut obs = WeeklyMetroObservation {
                cbsa: r.cbsa.clone(),
                cbsa_short: cbsa_short(&r.cbsa),
                report_date,
                hosp_timerange: extract_timerange(&r.hosp_timerange),
                admissions_covid_confirmed_last_7_days: r
                    .admissions_covid_confirmed_last_7_days,
                admits_100k: r.admits_100k,
                admits_pct_change: r.admits_pct_change,
                state: r.state.clone(),
                lat: r.lat,
                lon: r.lon,
                total_population_2019: r.total_population_2019,
                timeslider: timeslider_index[&report_date],
            };
            for patch in patches::coordinate_patches() {
                if obs.cbsa == patch.cbsa {
                    obs.lat = patch.lat;
                    obs.lon = patch.lon;
                }
            }
            Some(obs)
        })
        .collect()
}

/// Shortened display label: text before the first comma, trimmed.
///
/// A name with no comma degrades to the whole string trimmed.
pub fn cbsa_short(cbsa: &str) -> String {
    match cbsa.split_once(',') {
        Some((head, _)) => head.trim().to_string(),
        None => cbsa.trim().to_string(),
    }
}

/// Reporting-window label: the substring between the first `(` and the
/// following `)` when present, otherwise the input trimmed.
///
/// Later dataset builds ship the label pre-extracted; those pass through.
pub fn extract_timerange(raw: &str) -> String {
    if let Some(open) = raw.find('(') {
        if let Some(len) = raw[open + 1..].find(')') {
            return raw[open + 1..open + 1 + len].to_string();
        }
    }
    raw.trim().to_string()
}
