//! Weather-driven agricultural alerts

use crate::models::{Alert, AlertSeverity, AlertType, ForecastDay, WeatherSnapshot};

/// Thresholds driving the alert rules, collected in one table.
pub struct AlertThresholds {
    /// Current temperature above this is a heat warning (deg C)
    pub heat_c: f64,
    /// Current temperature below this is a cold warning (deg C)
    pub cold_c: f64,
    /// Current rainfall above this is heavy rain (mm)
    pub heavy_rain_mm: f64,
    /// More dry forecast days than this (with no current rain) is drought risk
    pub drought_dry_days: usize,
    /// Current humidity above this is high (%)
    pub humidity_high_pct: f64,
    /// Current humidity below this is low (%)
    pub humidity_low_pct: f64,
    /// Any forecast day above this is extreme heat (deg C)
    pub forecast_extreme_heat_c: f64,
    /// Any forecast day below this is frost risk (deg C)
    pub forecast_frost_c: f64,
    /// Any forecast day above this is heavy rain (mm)
    pub forecast_heavy_rain_mm: f64,
}

pub const ALERT_THRESHOLDS: AlertThresholds = AlertThresholds {
    heat_c: 35.0,
    cold_c: 10.0,
    heavy_rain_mm: 20.0,
    drought_dry_days: 3,
    humidity_high_pct: 85.0,
    humidity_low_pct: 40.0,
    forecast_extreme_heat_c: 38.0,
    forecast_frost_c: 5.0,
    forecast_heavy_rain_mm: 30.0,
};

fn alert(
    alert_type: AlertType,
    severity: AlertSeverity,
    message: impl Into<String>,
    recommendation: impl Into<String>,
) -> Alert {
    Alert {
        alert_type,
        severity,
        message: message.into(),
        recommendation: recommendation.into(),
    }
}

/// Evaluate all alert rules against current conditions and the forecast.
///
/// Pure and total. The returned order is the rule evaluation order below and
/// is never re-sorted by severity. The temperature pair and the humidity
/// pair are each mutually exclusive; every other rule is independent.
pub fn generate_alerts(current: &WeatherSnapshot, forecast: &[ForecastDay]) -> Vec<Alert> {
    let t = &ALERT_THRESHOLDS;
    let mut alerts = Vec::new();

    if current.temperature_c > t.heat_c {
        alerts.push(alert(
            AlertType::HighTemperature,
            AlertSeverity::Warning,
            format!(
                "Current temperature {:.1} deg C exceeds the crop stress threshold.",
                current.temperature_c
            ),
            "Irrigate in the early morning or evening and provide shade for sensitive crops.",
        ));
    } else if current.temperature_c < t.cold_c {
        alerts.push(alert(
            AlertType::LowTemperature,
            AlertSeverity::Warning,
            format!(
                "Current temperature {:.1} deg C is below the safe range for most crops.",
                current.temperature_c
            ),
            "Delay sowing and protect seedlings from cold stress.",
        ));
    }

    if current.rainfall_mm > t.heavy_rain_mm {
        alerts.push(alert(
            AlertType::HeavyRain,
            AlertSeverity::Warning,
            format!("Heavy rainfall of {:.1} mm recorded.", current.rainfall_mm),
            "Check field drainage and postpone fertilizer application.",
        ));
    } else if current.rainfall_mm == 0.0 {
        let dry_days = forecast.iter().filter(|d| d.rainfall_mm == 0.0).count();
        if dry_days > t.drought_dry_days {
            alerts.push(alert(
                AlertType::DroughtRisk,
                AlertSeverity::Info,
                format!(
                    "No current rainfall and {} dry days in the forecast.",
                    dry_days
                ),
                "Plan irrigation ahead and mulch to retain soil moisture.",
            ));
        }
    }

    if current.humidity_pct > t.humidity_high_pct {
        alerts.push(alert(
            AlertType::HighHumidity,
            AlertSeverity::Info,
            format!("Humidity at {:.0}% favors fungal disease.", current.humidity_pct),
            "Improve air circulation and scout for early signs of blight.",
        ));
    } else if current.humidity_pct < t.humidity_low_pct {
        alerts.push(alert(
            AlertType::LowHumidity,
            AlertSeverity::Info,
            format!("Humidity at {:.0}% is low.", current.humidity_pct),
            "Increase irrigation frequency to offset evaporative loss.",
        ));
    }

    if forecast
        .iter()
        .any(|d| d.temperature_c > t.forecast_extreme_heat_c)
    {
        alerts.push(alert(
            AlertType::ExtremeHeatForecast,
            AlertSeverity::Warning,
            "Extreme heat above 38 deg C expected in the coming days.",
            "Schedule irrigation before the heat peak and avoid midday field work.",
        ));
    }

    if forecast.iter().any(|d| d.temperature_c < t.forecast_frost_c) {
        alerts.push(alert(
            AlertType::FrostForecast,
            AlertSeverity::Warning,
            "Temperatures below 5 deg C expected; frost risk for standing crops.",
            "Irrigate lightly in the evening and cover nursery beds overnight.",
        ));
    }

    if forecast
        .iter()
        .any(|d| d.rainfall_mm > t.forecast_heavy_rain_mm)
    {
        alerts.push(alert(
            AlertType::HeavyRainForecast,
            AlertSeverity::Warning,
            "Heavy rainfall above 30 mm expected in the coming days.",
            "Harvest mature produce early and clear drainage channels now.",
        ));
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn snapshot(temperature: f64, rainfall: f64, humidity: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c: temperature,
            rainfall_mm: rainfall,
            humidity_pct: humidity,
        }
    }

    fn forecast(days: &[(f64, f64)]) -> Vec<ForecastDay> {
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
    fn test_no_alerts_for_mild_weather() {
        let alerts = generate_alerts(
            &snapshot(28.0, 5.0, 60.0),
            &forecast(&[(30.0, 4.0), (29.0, 6.0), (31.0, 2.0), (30.0, 3.0), (28.0, 5.0)]),
        );
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_heat_and_cold_mutually_exclusive() {
        let hot = generate_alerts(&snapshot(36.0, 5.0, 60.0), &forecast(&[]));
        assert_eq!(count(&hot, AlertType::HighTemperature), 1);
        assert_eq!(count(&hot, AlertType::LowTemperature), 0);

        let cold = generate_alerts(&snapshot(8.0, 5.0, 60.0), &forecast(&[]));
        assert_eq!(count(&cold, AlertType::HighTemperature), 0);
        assert_eq!(count(&cold, AlertType::LowTemperature), 1);
    }

    #[test]
    fn test_humidity_pair_mutually_exclusive() {
        let humid = generate_alerts(&snapshot(28.0, 5.0, 90.0), &forecast(&[]));
        assert_eq!(count(&humid, AlertType::HighHumidity), 1);
        assert_eq!(count(&humid, AlertType::LowHumidity), 0);

        let dry = generate_alerts(&snapshot(28.0, 5.0, 30.0), &forecast(&[]));
        assert_eq!(count(&dry, AlertType::HighHumidity), 0);
        assert_eq!(count(&dry, AlertType::LowHumidity), 1);
    }

    #[test]
    fn test_drought_requires_enough_dry_days() {
        // Four dry days out of five triggers drought risk
        let risky = generate_alerts(
            &snapshot(28.0, 0.0, 60.0),
            &forecast(&[(30.0, 0.0), (31.0, 0.0), (32.0, 0.0), (30.0, 0.0), (29.0, 5.0)]),
        );
        assert_eq!(count(&risky, AlertType::DroughtRisk), 1);
        assert!(risky[0].message.contains('4'));

        // Three dry days is not enough
        let fine = generate_alerts(
            &snapshot(28.0, 0.0, 60.0),
            &forecast(&[(30.0, 0.0), (31.0, 0.0), (32.0, 0.0), (30.0, 5.0), (29.0, 5.0)]),
        );
        assert_eq!(count(&fine, AlertType::DroughtRisk), 0);
    }

    #[test]
    fn test_heavy_rain_suppresses_drought_branch() {
        let alerts = generate_alerts(
            &snapshot(28.0, 25.0, 60.0),
            &forecast(&[(30.0, 0.0), (31.0, 0.0), (32.0, 0.0), (30.0, 0.0), (29.0, 0.0)]),
        );
        assert_eq!(count(&alerts, AlertType::HeavyRain), 1);
        assert_eq!(count(&alerts, AlertType::DroughtRisk), 0);
    }

    #[test]
    fn test_forecast_rules() {
        let alerts = generate_alerts(
            &snapshot(28.0, 5.0, 60.0),
            &forecast(&[(39.0, 0.0), (4.0, 0.0), (30.0, 35.0), (30.0, 0.0), (29.0, 0.0)]),
        );
        assert_eq!(count(&alerts, AlertType::ExtremeHeatForecast), 1);
        assert_eq!(count(&alerts, AlertType::FrostForecast), 1);
        assert_eq!(count(&alerts, AlertType::HeavyRainForecast), 1);
    }

    /// Insertion order equals rule order: current-condition alerts come
    /// before forecast alerts regardless of severity.
    #[test]
    fn test_alert_order_is_rule_order() {
        let alerts = generate_alerts(
            &snapshot(36.0, 25.0, 90.0),
            &forecast(&[(39.0, 35.0), (4.0, 0.0), (30.0, 0.0), (30.0, 0.0), (29.0, 0.0)]),
        );
        let order: Vec<AlertType> = alerts.iter().map(|a| a.alert_type).collect();
        assert_eq!(
            order,
            vec![
                AlertType::HighTemperature,
                AlertType::HeavyRain,
                AlertType::HighHumidity,
                AlertType::ExtremeHeatForecast,
                AlertType::FrostForecast,
                AlertType::HeavyRainForecast,
            ]
        );
    }
}
