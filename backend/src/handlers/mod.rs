//! HTTP handlers for the Crop Yield Advisory Platform

mod alerts;
mod estimation;
mod health;

pub use alerts::*;
pub use estimation::*;
pub use health::*;
