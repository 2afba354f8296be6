//! Shared types and domain rules for the Crop Yield Advisory Platform
//!
//! This crate contains the models, the pure estimation engine, and input
//! validation shared between the backend and other components of the system.

pub mod engine;
pub mod models;
pub mod types;
pub mod validation;

pub use engine::*;
pub use models::*;
pub use types::*;
pub use validation::*;
