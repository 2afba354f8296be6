//! External prediction model bridge
//!
//! Delegates yield estimation to an out-of-process predictor. The subprocess
//! receives the JSON-encoded estimation input as its single positional
//! argument and must print one JSON object `{"prediction": .., "confidence": ..}`
//! on stdout. Any failure - spawn error, nonzero exit, stderr output,
//! malformed stdout, timeout - falls back to the rule-based estimator and is
//! never surfaced to the caller.

use std::process::Stdio;
use std::time::Duration;

use serde::Deserialize;
use shared::{estimate_yield, EstimationInput, YieldEstimate};
use tokio::process::Command;
use tokio::sync::Semaphore;
use tokio::time::timeout;

use crate::config::ModelConfig;
use crate::error::{AppError, AppResult};

/// Runs the external prediction process with bounded concurrency
pub struct ModelRunner {
    config: ModelConfig,
    permits: Semaphore,
}

/// Expected stdout payload of the prediction process
#[derive(Debug, Deserialize)]
struct ModelOutput {
    prediction: f64,
    confidence: f64,
}

impl ModelRunner {
    /// Create a runner from configuration
    pub fn new(config: ModelConfig) -> Self {
        let permits = Semaphore::new(config.max_concurrent.max(1));
        Self { config, permits }
    }

    /// Whether an external model command is configured
    pub fn is_configured(&self) -> bool {
        !self.config.command.trim().is_empty()
    }

    /// Estimate yield, delegating to the external process when configured.
    ///
    /// Total: every failure path logs and returns the rule-based fallback
    /// estimate for the same input.
    pub async fn estimate(&self, input: &EstimationInput) -> YieldEstimate {
        if !self.is_configured() {
            return estimate_yield(input);
        }

        match self.run_model(input).await {
            Ok(output) => YieldEstimate {
                yield_per_acre: output.prediction,
                confidence: output.confidence,
            },
            Err(e) => {
                tracing::warn!("Prediction model failed, using rule-based fallback: {}", e);
                estimate_yield(input)
            }
        }
    }

    /// Spawn the process and parse its output. One attempt, no retries.
    async fn run_model(&self, input: &EstimationInput) -> AppResult<ModelOutput> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| AppError::ModelError("Runner shut down".to_string()))?;

        let payload = serde_json::to_string(input)
            .map_err(|e| AppError::ModelError(format!("Failed to encode input: {}", e)))?;

        let child = Command::new(&self.config.command)
            .args(&self.config.args)
            .arg(payload)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // The child must not outlive a timed-out request
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| AppError::ModelError(format!("Failed to spawn process: {}", e)))?;

        let deadline = Duration::from_secs(self.config.timeout_secs);
        let output = timeout(deadline, child.wait_with_output())
            .await
            .map_err(|_| {
                AppError::ModelError(format!("Timed out after {}s", self.config.timeout_secs))
            })?
            .map_err(|e| AppError::ModelError(format!("Process I/O error: {}", e)))?;

        if !output.status.success() {
            return Err(AppError::ModelError(format!(
                "Process exited with {}",
                output.status
            )));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            return Err(AppError::ModelError(format!(
                "Process wrote to stderr: {}",
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout
            .lines()
            .find(|l| !l.trim().is_empty())
            .ok_or_else(|| AppError::ModelError("Empty stdout".to_string()))?;

        serde_json::from_str(line)
            .map_err(|e| AppError::ModelError(format!("Malformed stdout: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{
        CropType, RegionCategory, SoilProfile, SoilType, WeatherSnapshot, FALLBACK_CONFIDENCE,
    };

    fn sample_input() -> EstimationInput {
        EstimationInput {
            crop: CropType::Rice,
            area: 2.0,
            region: RegionCategory::Coastal,
            soil: SoilProfile {
                soil_type: SoilType::Alluvial,
                ph: 6.5,
                nitrogen: 0.12,
                phosphorus: 0.06,
                potassium: 0.08,
                organic_matter: 1.8,
            },
            weather: WeatherSnapshot {
                temperature_c: 28.0,
                rainfall_mm: 1100.0,
                humidity_pct: 70.0,
            },
        }
    }

    fn runner(command: &str, args: &[&str], timeout_secs: u64) -> ModelRunner {
        ModelRunner::new(ModelConfig {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            timeout_secs,
            max_concurrent: 2,
        })
    }

    #[tokio::test]
    async fn test_unconfigured_runner_uses_rule_based_estimate() {
        let runner = runner("", &[], 5);
        let input = sample_input();
        assert_eq!(runner.estimate(&input).await, estimate_yield(&input));
    }

    #[tokio::test]
    async fn test_nonzero_exit_falls_back() {
        let runner = runner("sh", &["-c", "exit 1"], 5);
        let input = sample_input();
        let estimate = runner.estimate(&input).await;
        assert_eq!(estimate, estimate_yield(&input));
        assert_eq!(estimate.confidence, FALLBACK_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_valid_model_output_is_used() {
        let runner = runner(
            "sh",
            &["-c", r#"echo '{"prediction": 4200.0, "confidence": 91.0}'"#],
            5,
        );
        let estimate = runner.estimate(&sample_input()).await;
        assert_eq!(estimate.yield_per_acre, 4200.0);
        assert_eq!(estimate.confidence, 91.0);
    }

    #[tokio::test]
    async fn test_stderr_output_is_a_soft_failure() {
        let runner = runner(
            "sh",
            &[
                "-c",
                r#"echo '{"prediction": 4200.0, "confidence": 91.0}'; echo 'model warning' >&2"#,
            ],
            5,
        );
        let input = sample_input();
        assert_eq!(runner.estimate(&input).await, estimate_yield(&input));
    }

    #[tokio::test]
    async fn test_malformed_stdout_falls_back() {
        let runner = runner("sh", &["-c", "echo not-json"], 5);
        let input = sample_input();
        assert_eq!(runner.estimate(&input).await, estimate_yield(&input));
    }

    #[tokio::test]
    async fn test_timeout_kills_process_and_falls_back() {
        let runner = runner("sh", &["-c", "sleep 30"], 1);
        let input = sample_input();
        let started = std::time::Instant::now();
        let estimate = runner.estimate(&input).await;
        assert_eq!(estimate, estimate_yield(&input));
        // The child was killed at the deadline, not awaited to completion
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}
