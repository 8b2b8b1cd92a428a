mod ceqr_zones_app;
pub mod simplify;

pub use ceqr_zones_app::{CeqrZonesApp, CeqrZonesOperation};
