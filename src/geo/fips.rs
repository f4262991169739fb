//! State postal code to FIPS code mapping.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Deserialize)]
struct FipsFile {
    fips: HashMap<String, String>,
}

static FIPS: OnceLock<HashMap<String, String>> = OnceLock::new();

fn table() -> &'static HashMap<String, String> {
    FIPS.get_or_init(|| {
        let file: FipsFile = toml::from_str(include_str!("../../assets/state_fips.toml"))
            .expect("bundled state_fips.toml is valid");
        file.fips
    })
}

/// FIPS code for a state/territory postal code.
///
/// Unknown codes return `None`; callers degrade to showing no boundary
/// highlight rather than failing.
pub fn state_fips(code: &str) -> Option<&'static str> {
    table().get(code).map(String::as_str)
}
