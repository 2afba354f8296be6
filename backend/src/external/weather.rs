//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap API for current conditions and forecasts

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use shared::{ForecastDay, WeatherSnapshot, FORECAST_DAYS};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    rain: Option<OwmForecastRain>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<WeatherSnapshot> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| AppError::WeatherServiceUnavailable)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API error: {} - {}", status, body);
            return Err(AppError::WeatherServiceUnavailable);
        }

        let data: OwmCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse weather response: {}", e)))?;

        Ok(WeatherSnapshot {
            temperature_c: data.main.temp,
            rainfall_mm: data
                .rain
                .as_ref()
                .and_then(|r| r.one_hour.or(r.three_hour))
                .unwrap_or(0.0),
            humidity_pct: data.main.humidity,
        })
    }

    /// Fetch the short-term forecast by GPS coordinates, aggregated to one
    /// entry per day
    pub async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<Vec<ForecastDay>> {
        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}&units=metric",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| AppError::WeatherServiceUnavailable)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API error: {} - {}", status, body);
            return Err(AppError::WeatherServiceUnavailable);
        }

        let data: OwmForecastResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse forecast response: {}", e)))?;

        Ok(aggregate_daily(data))
    }
}

/// Collapse the 3-hourly forecast list into at most [`FORECAST_DAYS`] daily
/// entries: max temperature, summed rainfall, mean humidity per day.
fn aggregate_daily(data: OwmForecastResponse) -> Vec<ForecastDay> {
    let mut days: Vec<(NaiveDate, f64, f64, f64, usize)> = Vec::new();

    for item in data.list {
        let date = DateTime::from_timestamp(item.dt, 0)
            .unwrap_or_else(Utc::now)
            .date_naive();
        let rain = item.rain.and_then(|r| r.three_hour).unwrap_or(0.0);

        match days.last_mut() {
            Some(day) if day.0 == date => {
                day.1 = day.1.max(item.main.temp);
                day.2 += rain;
                day.3 += item.main.humidity;
                day.4 += 1;
            }
            _ => days.push((date, item.main.temp, rain, item.main.humidity, 1)),
        }
    }

    days.into_iter()
        .take(FORECAST_DAYS)
        .map(|(date, temperature, rainfall, humidity_sum, samples)| ForecastDay {
            date,
            temperature_c: temperature,
            rainfall_mm: rainfall,
            humidity_pct: humidity_sum / samples as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(dt: i64, temp: f64, humidity: f64, rain: Option<f64>) -> OwmForecastItem {
        OwmForecastItem {
            dt,
            main: OwmMain { temp, humidity },
            rain: rain.map(|three_hour| OwmForecastRain {
                three_hour: Some(three_hour),
            }),
        }
    }

    #[test]
    fn test_aggregate_daily_groups_by_date() {
        // Two samples on day one, one on day two (86400s apart)
        let data = OwmForecastResponse {
            list: vec![
                item(1_700_000_000, 30.0, 60.0, Some(2.0)),
                item(1_700_010_800, 33.0, 70.0, Some(1.0)),
                item(1_700_086_400, 28.0, 80.0, None),
            ],
        };

        let days = aggregate_daily(data);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].temperature_c, 33.0);
        assert_eq!(days[0].rainfall_mm, 3.0);
        assert_eq!(days[0].humidity_pct, 65.0);
        assert_eq!(days[1].rainfall_mm, 0.0);
    }

    #[test]
    fn test_aggregate_daily_caps_at_forecast_days() {
        let list = (0..10)
            .map(|i| item(1_700_000_000 + i * 86_400, 30.0, 60.0, None))
            .collect();
        let days = aggregate_daily(OwmForecastResponse { list });
        assert_eq!(days.len(), FORECAST_DAYS);
    }
}
