//! Service layer: scope, selection, and view projections.
//!
//! These functions are pure over the prepared table. The hosting layer (HTTP
//! handlers or anything else) owns the user's current selections and calls in
//! here per interaction; nothing in this module assumes a re-execution model.

pub mod export;
pub mod selection;
pub mod sources;
pub mod views;

pub use export::export_csv;
pub use selection::{default_metros, metros, resolve_selection, scope_rows, states, Scope};
pub use sources::{load_sources, SourceEntry};
pub use views::{map_view, table_view, timeslider_domain, trend_view, MapView, TableRow};

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
