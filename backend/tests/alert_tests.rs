//! Weather alert generation tests

use chrono::NaiveDate;
use proptest::prelude::*;
use shared::{generate_alerts, Alert, AlertSeverity, AlertType, ForecastDay, WeatherSnapshot};

fn snapshot(temperature: f64, rainfall: f64, humidity: f64) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_c: temperature,
        rainfall_mm: rainfall,
        humidity_pct: humidity,
    }
}

fn forecast_of(days: &[(f64, f64)]) -> Vec<ForecastDay> {
    days.iter()
        .enumerate()
        .map(|(i, (temperature, rainfall))| ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 6, 1 + i as u32).unwrap(),
            temperature_c: *temperature,
            rainfall_mm: *rainfall,
            humidity_pct: 60.0,
        })
        .collect()
}

fn count(alerts: &[Alert], alert_type: AlertType) -> usize {
    alerts.iter().filter(|a| a.alert_type == alert_type).count()
}

#[test]
fn test_high_temperature_alert_present_and_exclusive() {
    let alerts = generate_alerts(
        &snapshot(36.0, 5.0, 60.0),
        &forecast_of(&[(30.0, 2.0), (31.0, 3.0), (29.0, 1.0), (30.0, 2.0), (28.0, 4.0)]),
    );
    assert_eq!(count(&alerts, AlertType::HighTemperature), 1);
    assert_eq!(count(&alerts, AlertType::LowTemperature), 0);

    let heat = alerts
        .iter()
        .find(|a| a.alert_type == AlertType::HighTemperature)
        .unwrap();
    assert_eq!(heat.severity, AlertSeverity::Warning);
    assert!(!heat.recommendation.is_empty());
}

#[test]
fn test_drought_message_carries_dry_day_count() {
    let alerts = generate_alerts(
        &snapshot(30.0, 0.0, 55.0),
        &forecast_of(&[(32.0, 0.0), (33.0, 0.0), (34.0, 0.0), (33.0, 0.0), (32.0, 0.0)]),
    );
    let drought = alerts
        .iter()
        .find(|a| a.alert_type == AlertType::DroughtRisk)
        .expect("five dry days should raise drought risk");
    assert_eq!(drought.severity, AlertSeverity::Info);
    assert!(drought.message.contains('5'));
}

#[test]
fn test_forecast_alerts_fire_on_any_matching_day() {
    let alerts = generate_alerts(
        &snapshot(28.0, 5.0, 60.0),
        &forecast_of(&[(30.0, 2.0), (30.0, 2.0), (30.0, 2.0), (30.0, 2.0), (39.5, 2.0)]),
    );
    assert_eq!(count(&alerts, AlertType::ExtremeHeatForecast), 1);
    assert_eq!(count(&alerts, AlertType::FrostForecast), 0);
}

#[test]
fn test_calm_weather_produces_no_alerts() {
    let alerts = generate_alerts(
        &snapshot(27.0, 3.0, 65.0),
        &forecast_of(&[(28.0, 2.0), (29.0, 4.0), (27.0, 1.0), (28.0, 3.0), (26.0, 2.0)]),
    );
    assert!(alerts.is_empty());
}

proptest! {
    /// The temperature pair is mutually exclusive for every input.
    #[test]
    fn prop_temperature_alerts_exclusive(
        temperature in -30.0..60.0f64,
        rainfall in 0.0..100.0f64,
        humidity in 0.0..100.0f64,
    ) {
        let alerts = generate_alerts(&snapshot(temperature, rainfall, humidity), &[]);
        let pair = count(&alerts, AlertType::HighTemperature)
            + count(&alerts, AlertType::LowTemperature);
        prop_assert!(pair <= 1);
    }

    /// The humidity pair is mutually exclusive for every input.
    #[test]
    fn prop_humidity_alerts_exclusive(
        temperature in -30.0..60.0f64,
        rainfall in 0.0..100.0f64,
        humidity in 0.0..100.0f64,
    ) {
        let alerts = generate_alerts(&snapshot(temperature, rainfall, humidity), &[]);
        let pair = count(&alerts, AlertType::HighHumidity)
            + count(&alerts, AlertType::LowHumidity);
        prop_assert!(pair <= 1);
    }

    /// Each rule appends at most one alert, so a call can never yield
    /// duplicates of the same alert type.
    #[test]
    fn prop_no_duplicate_alert_types(
        temperature in -30.0..60.0f64,
        rainfall in 0.0..100.0f64,
        humidity in 0.0..100.0f64,
        forecast_temp in -10.0..45.0f64,
        forecast_rain in 0.0..60.0f64,
    ) {
        let forecast = forecast_of(&[
            (forecast_temp, forecast_rain),
            (forecast_temp, 0.0),
            (30.0, forecast_rain),
            (30.0, 0.0),
            (30.0, 0.0),
        ]);
        let alerts = generate_alerts(&snapshot(temperature, rainfall, humidity), &forecast);
        for alert in &alerts {
            prop_assert_eq!(count(&alerts, alert.alert_type), 1);
        }
    }
}
