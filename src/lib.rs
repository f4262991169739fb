//! # CBSA Explorer Backend
//!
//! Backend for the COVID US Metro Areas Explorer dashboard.
//!
//! This crate loads the weekly CBSA hospital-admission time series, derives the
//! display-ready table (timeslider index, short labels, coordinate patches), and
//! exposes the scope/selection/filter semantics that drive the linked map,
//! time-series, and table views. The HTTP API (axum) serves those projections to
//! whatever frontend renders them.
//!
//! ## Architecture
//!
//! - [`models`]: core row types and date wire formats
//! - [`data`]: CSV loading, derivation, checksum-keyed memoization, dataset store
//! - [`services`]: scope/selection semantics, view projections, CSV export
//! - [`geo`]: state FIPS mapping and cached reference-topology fetches
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! The pipeline is explicit and pure: `load` -> `derive` once per dataset,
//! then read-only filtering per request. The prepared table is immutable;
//! interaction never triggers a re-derive.

pub mod config;

pub mod models;

pub mod data;

pub mod services;

pub mod geo;

#[cfg(feature = "http-server")]
pub mod http;
