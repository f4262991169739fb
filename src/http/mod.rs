//! HTTP server module for the explorer backend.
//!
//! An axum-based REST API over the service layer. The frontend owns the
//! controls (state selector, metro multiselect, week slider) and calls these
//! endpoints on every interaction; the backend recomputes nothing but the
//! requested projection.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
