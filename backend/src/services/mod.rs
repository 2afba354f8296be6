//! Business logic services for the Crop Yield Advisory Platform

pub mod estimation;
pub mod history;
pub mod weather;

pub use estimation::EstimationService;
pub use history::HistoryService;
pub use weather::WeatherService;
