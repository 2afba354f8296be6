//! The yield estimation and agronomic recommendation engine
//!
//! Every component in this module is a pure, total function over validated
//! input: same input, same output, no I/O, no shared mutable state. The
//! external model bridge in the backend delegates here when the out-of-process
//! predictor is unavailable.

pub mod alerts;
pub mod estimator;
pub mod recommendation;
pub mod region;
pub mod soil;

pub use alerts::generate_alerts;
pub use estimator::{base_yield, estimate_yield, FALLBACK_CONFIDENCE};
pub use recommendation::generate_recommendations;
pub use region::classify_region;
pub use soil::soil_profile_for_region;
