use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a valid config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("CAPSNIFF_ENV", "development"))?;
    let log_level = or_default("CAPSNIFF_LOG_LEVEL", "info");
    let lexicon_path = lookup("CAPSNIFF_LEXICON_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let threshold_raw = or_default("CAPSNIFF_CONFIDENCE_THRESHOLD", "0.7");
    let confidence_threshold =
        threshold_raw
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "CAPSNIFF_CONFIDENCE_THRESHOLD".to_string(),
                reason: e.to_string(),
            })?;
    if !(0.0..=1.0).contains(&confidence_threshold) {
        return Err(ConfigError::InvalidEnvVar {
            var: "CAPSNIFF_CONFIDENCE_THRESHOLD".to_string(),
            reason: format!("{confidence_threshold} is outside [0, 1]"),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        lexicon_path,
        confidence_threshold,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CAPSNIFF_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
