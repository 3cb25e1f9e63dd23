use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.host.trim().is_empty() {
        errors.push("HOST must not be empty".to_string());
    }

    if cfg.mongo_uri.trim().is_empty() {
        errors.push("MONGO_URI must not be empty".to_string());
    }

    if cfg.mongo_database.trim().is_empty() {
        errors.push("MONGO_DATABASE must not be empty".to_string());
    }

    if cfg.mongo_collection.trim().is_empty() {
        errors.push("MONGO_COLLECTION must not be empty".to_string());
    }

    if cfg.mongo_max_pool_size == 0 {
        errors.push("MONGO_MAX_POOL_SIZE must be > 0".to_string());
    }

    if cfg.mongo_min_pool_size > cfg.mongo_max_pool_size {
        errors.push(format!(
            "MONGO_MIN_POOL_SIZE ({}) must be <= MONGO_MAX_POOL_SIZE ({})",
            cfg.mongo_min_pool_size, cfg.mongo_max_pool_size
        ));
    }

    if cfg.mongo_connect_timeout_secs == 0 {
        errors.push("MONGO_CONNECT_TIMEOUT_SECS must be > 0".to_string());
    }

    if cfg.mongo_server_selection_timeout_secs == 0 {
        errors.push("MONGO_SERVER_SELECTION_TIMEOUT_SECS must be > 0".to_string());
    }

    if cfg.mongo_disconnect_timeout_secs == 0 {
        errors.push("MONGO_DISCONNECT_TIMEOUT_SECS must be > 0".to_string());
    }

    if cfg.request_timeout_secs == 0 {
        errors.push("REQUEST_TIMEOUT_SECS must be > 0".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::AppConfig;

    fn valid() -> AppConfig {
        AppConfig {
            mongo_uri: "mongodb://localhost:27017".to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn defaults_with_uri_are_valid() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn min_pool_above_max_is_rejected() {
        let cfg = AppConfig {
            mongo_min_pool_size: 60,
            ..valid()
        };

        let err = validate(&cfg).expect_err("pool bounds should be checked");
        assert!(err.to_string().contains("MONGO_MIN_POOL_SIZE (60)"));
    }

    #[test]
    fn reports_every_problem_at_once() {
        let cfg = AppConfig {
            mongo_uri: "  ".to_string(),
            request_timeout_secs: 0,
            mongo_max_pool_size: 0,
            mongo_min_pool_size: 0,
            ..AppConfig::default()
        };

        let message = validate(&cfg).expect_err("config is invalid").to_string();
        assert!(message.contains("MONGO_URI must not be empty"));
        assert!(message.contains("REQUEST_TIMEOUT_SECS must be > 0"));
        assert!(message.contains("MONGO_MAX_POOL_SIZE must be > 0"));
    }
}
