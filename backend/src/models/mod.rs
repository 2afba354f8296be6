//! Database models for the Crop Yield Advisory Platform
//!
//! Re-exports models from the shared crate and adds backend-specific models

pub use shared::models::*;
