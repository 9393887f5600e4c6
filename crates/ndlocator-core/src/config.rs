use crate::app_config::{AppConfig, Environment};
use crate::error::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the actual environment so it can be tested with a pure
/// `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let remote_url = require("NDLOC_REMOTE_URL")?;
    let remote_api_key = lookup("NDLOC_REMOTE_API_KEY").ok();

    let env = parse_environment(&or_default("NDLOC_ENV", "development"));
    let bind_addr = parse_addr("NDLOC_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("NDLOC_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("NDLOC_DATA_DIR", "./data"));
    let request_timeout_secs = parse_u64("NDLOC_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("NDLOC_USER_AGENT", "ndlocator/0.1 (unit-locator)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        data_dir,
        remote_url,
        remote_api_key,
        request_timeout_secs,
        user_agent,
    })
}

/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("NDLOC_REMOTE_URL", "https://records.example.com");
        m
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
        assert_eq!(parse_environment("production"), Environment::Production);
        assert_eq!(parse_environment("test"), Environment::Test);
    }

    #[test]
    fn fails_without_remote_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "NDLOC_REMOTE_URL"),
            "expected MissingEnvVar(NDLOC_REMOTE_URL), got: {result:?}"
        );
    }

    #[test]
    fn fails_with_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("NDLOC_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NDLOC_BIND_ADDR"),
            "expected InvalidEnvVar(NDLOC_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn fails_with_invalid_timeout() {
        let mut map = full_env();
        map.insert("NDLOC_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NDLOC_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(NDLOC_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn succeeds_with_defaults() {
        let cfg = build_app_config(lookup_from_map(&full_env())).unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.data_dir.to_string_lossy(), "./data");
        assert_eq!(cfg.remote_url, "https://records.example.com");
        assert!(cfg.remote_api_key.is_none());
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "ndlocator/0.1 (unit-locator)");
    }

    #[test]
    fn overrides_are_respected() {
        let mut map = full_env();
        map.insert("NDLOC_REMOTE_API_KEY", "anon-key");
        map.insert("NDLOC_BIND_ADDR", "127.0.0.1:8080");
        map.insert("NDLOC_REQUEST_TIMEOUT_SECS", "10");
        map.insert("NDLOC_ENV", "production");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.remote_api_key.as_deref(), Some("anon-key"));
        assert_eq!(cfg.request_timeout_secs, 10);
    }

    #[test]
    fn debug_redacts_api_key() {
        let mut map = full_env();
        map.insert("NDLOC_REMOTE_API_KEY", "secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[redacted]"));
    }
}
