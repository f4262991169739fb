//! Scope and metro-selection semantics.

use crate::config::SelectionConfig;
use crate::models::WeeklyMetroObservation;

/// Sentinel the state selector uses for the national view.
pub const ALL_USA: &str = "All USA";

/// The user's state scope.
///
/// Explicit rather than inferred from the selector string, because the
/// meaning of an empty metro selection flips with it (see
/// [`resolve_selection`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// National view, no state restriction
    AllUsa,
    /// Restrict to one state/territory postal code
    State(String),
}

impl Scope {
    /// Build a scope from the state selector value. Absent, empty, or the
    /// "All USA" sentinel all mean the national view.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL_USA) => Scope::AllUsa,
            Some(state) => Scope::State(state.to_string()),
        }
    }

    pub fn matches(&self, state: &str) -> bool {
        match self {
            Scope::AllUsa => true,
            Scope::State(s) => s == state,
        }
    }

    /// The selected state code, if any.
    pub fn state(&self) -> Option<&str> {
        match self {
            Scope::AllUsa => None,
            Scope::State(s) => Some(s),
        }
    }
}

/// Restrict rows to the scope. Does not touch `timeslider`: the slider index
/// stays globally comparable across state selections.
pub fn scope_rows<'a>(
    rows: &'a [WeeklyMetroObservation],
    scope: &Scope,
) -> Vec<&'a WeeklyMetroObservation> {
    rows.iter().filter(|r| scope.matches(&r.state)).collect()
}

/// Default selected metros (`cbsa_init`) for the scope.
///
/// Ranked descending by admissions on the most recent report date present in
/// the scoped rows, truncated to the configured limit. Nationally, only
/// metros above the admissions floor are eligible, so the default never lands
/// in the noisy long tail.
pub fn default_metros(
    scoped: &[&WeeklyMetroObservation],
    scope: &Scope,
    config: &SelectionConfig,
) -> Vec<String> {
    let latest = match scoped.iter().map(|r| r.report_date).max() {
        Some(date) => date,
        None => return Vec::new(),
    };
    let mut candidates: Vec<&&WeeklyMetroObservation> = scoped
        .iter()
        .filter(|r| r.report_date == latest)
        .filter(|r| match scope {
            Scope::AllUsa => {
                r.admissions_covid_confirmed_last_7_days > config.national_admissions_floor
            }
            Scope::State(_) => true,
        })
        .collect();
    candidates.sort_by(|a, b| {
        b.admissions_covid_confirmed_last_7_days
            .partial_cmp(&a.admissions_covid_confirmed_last_7_days)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.cbsa.cmp(&b.cbsa))
    });
    candidates
        .into_iter()
        .take(config.default_metro_limit)
        .map(|r| r.cbsa.clone())
        .collect()
}

/// Interpret the metro multiselect.
///
/// An empty selection means "none" in the national view and "all metros in
/// the state" in a state view. Deliberate UX default, not a bug.
pub fn resolve_selection(
    scoped: &[&WeeklyMetroObservation],
    scope: &Scope,
    selected: &[String],
) -> Vec<String> {
    if !selected.is_empty() {
        return selected.to_vec();
    }
    match scope {
        Scope::AllUsa => Vec::new(),
        Scope::State(_) => metros(scoped),
    }
}

/// Distinct metro names in the rows, sorted ascending.
pub fn metros(scoped: &[&WeeklyMetroObservation]) -> Vec<String> {
    let mut names: Vec<String> = scoped.iter().map(|r| r.cbsa.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Distinct state codes present in the table, sorted ascending.
pub fn states(rows: &[WeeklyMetroObservation]) -> Vec<String> {
    let mut codes: Vec<String> = rows.iter().map(|r| r.state.clone()).collect();
    codes.sort();
    codes.dedup();
    codes
}
