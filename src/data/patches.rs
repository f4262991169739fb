//! Static coordinate overrides.
//!
//! The patch table lives in `assets/coordinate_patches.toml` so it can be
//! updated without touching derivation code. Patches are unconditional: they
//! are reapplied identically on every load, whatever the upstream values.

use serde::Deserialize;
use std::sync::OnceLock;

/// One pinned representative point, keyed by full CBSA name.
#[derive(Debug, Clone, Deserialize)]
pub struct CoordinatePatch {
    pub cbsa: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
struct PatchFile {
    #[serde(default)]
    patch: Vec<CoordinatePatch>,
}

static PATCHES: OnceLock<Vec<CoordinatePatch>> = OnceLock::new();

/// The bundled coordinate patch table.
pub fn coordinate_patches() -> &'static [CoordinatePatch] {
    PATCHES.get_or_init(|| {
        let file: PatchFile = toml::from_str(include_str!("../../assets/coordinate_patches.toml"))
            .expect("bundled coordinate_patches.toml is valid");
        file.patch
    })
}
