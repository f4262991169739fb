//! Reference geography: FIPS mapping and boundary topology.

pub mod fips;
pub mod shapes;

pub use fips::state_fips;
pub use shapes::{ShapeCache, ShapeKind};
