//! External API integrations

pub mod geocoding;
pub mod model;
pub mod weather;

pub use geocoding::GeocodingClient;
pub use model::ModelRunner;
pub use weather::WeatherClient;
