use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
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
/// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the defaults reproduce the fixed timeouts and
/// User-Agent the scraper was designed around.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let secs = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if secs == 0 {
            return Err(invalid(var, "timeout must be at least 1 second".to_string()));
        }
        Ok(secs)
    };

    let parse_flag = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                invalid(var, format!("expected true/false, got \"{raw}\""))
            }),
            Err(_) => Ok(default),
        }
    };

    let env = parse_environment(&or_default("DEALSCOUT_ENV", "development"))?;
    let log_level = or_default("DEALSCOUT_LOG_LEVEL", "info");

    let scraper_request_timeout_secs = parse_secs("DEALSCOUT_SCRAPER_REQUEST_TIMEOUT_SECS", "10")?;
    let scraper_user_agent = or_default("DEALSCOUT_SCRAPER_USER_AGENT", DEFAULT_USER_AGENT);

    let browser_enabled = parse_flag("DEALSCOUT_BROWSER_ENABLED", true)?;
    let browser_wait_timeout_secs = parse_secs("DEALSCOUT_BROWSER_WAIT_TIMEOUT_SECS", "10")?;
    let browser_navigation_timeout_secs =
        parse_secs("DEALSCOUT_BROWSER_NAVIGATION_TIMEOUT_SECS", "30")?;
    let chromium_path = lookup("DEALSCOUT_CHROMIUM_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        scraper_request_timeout_secs,
        scraper_user_agent,
        browser_enabled,
        browser_wait_timeout_secs,
        browser_navigation_timeout_secs,
        chromium_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DEALSCOUT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
