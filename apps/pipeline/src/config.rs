use anyhow::{Context, Result};

/// Tunable pipeline thresholds, loaded once at process start.
///
/// The source system hardcoded both values; they stay as defaults here and
/// can be overridden through the environment.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Originality score (percentage, 0–100) above which a resume is flagged.
    pub fraud_threshold: f64,
    /// Company-name similarity ratio (0–1) above which two employer profiles
    /// are reported as colliding.
    pub company_name_threshold: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fraud_threshold: 70.0,
            company_name_threshold: 0.85,
        }
    }
}

impl PipelineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();
        Ok(Self {
            fraud_threshold: env_f64("PLACEMENT_FRAUD_THRESHOLD", defaults.fraud_threshold)?,
            company_name_threshold: env_f64(
                "PLACEMENT_COMPANY_NAME_THRESHOLD",
                defaults.company_name_threshold,
            )?,
        })
    }
}

fn env_f64(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("'{key}' must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_source_constants() {
        let config = PipelineConfig::default();
        assert_eq!(config.fraud_threshold, 70.0);
        assert_eq!(config.company_name_threshold, 0.85);
    }
}
