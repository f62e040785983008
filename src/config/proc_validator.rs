//! Configuration validation with aggregated errors.
//! - every required credential is non-blank
//! - the host forms a usable base URL
//! - timeout and logging invariants

use tracing::error;

use crate::client::request::base_url;
use crate::config::settings::{ClientConfig, LoggingConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_client_config(cfg: &ClientConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    let required = [
        ("client_id", &cfg.client_id),
        ("client_secret", &cfg.client_secret),
        ("member_number", &cfg.member_number),
        ("security_code", &cfg.security_code),
        ("customer_code", &cfg.customer_code),
        ("auth_scope", &cfg.auth_scope),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            errors.push(format!("config: '{}' is required and must not be blank", name));
        }
    }

    if cfg.host.trim().is_empty() {
        errors.push("config: 'host' must not be blank".to_string());
    } else if let Err(e) = base_url(&cfg.host) {
        errors.push(format!("config: 'host' '{}' is not a valid base url: {}", cfg.host, e));
    }

    if cfg.timeout_seconds == Some(0) {
        errors.push("config: 'timeout_seconds' must be > 0".to_string());
    }

    if let Some(logging) = &cfg.logging {
        validate_logging(logging, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for e in &errors {
            error!("{}", e);
        }
        Err(errors)
    }
}

fn validate_logging(logging: &LoggingConfig, errors: &mut Vec<String>) {
    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        errors.push(format!(
            "config: logging.level '{}' must be one of {}",
            logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
