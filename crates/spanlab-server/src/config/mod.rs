//! Service config loader (strict parsing).
//!
//! Resolution order: built-in defaults, then an optional `spanlab.yaml` in
//! the working directory, then `HOST`/`PORT` environment overrides. Read once
//! at startup; nothing reloads at runtime.

pub mod schema;

use std::fs;
use std::path::Path;

use spanlab_core::error::{Result, SpanLabError};

pub use schema::{ServerSection, ServiceConfig};

/// Default config file looked up next to the process.
pub const CONFIG_FILE: &str = "spanlab.yaml";

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SpanLabError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| SpanLabError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Full startup resolution: defaults, optional file, env overrides.
pub fn load() -> Result<ServiceConfig> {
    let mut cfg = if Path::new(CONFIG_FILE).exists() {
        load_from_file(CONFIG_FILE)?
    } else {
        ServiceConfig::default()
    };
    apply_env(&mut cfg, std::env::vars())?;
    cfg.validate()?;
    Ok(cfg)
}

/// Apply `HOST`/`PORT` overrides from an explicit variable list, so tests can
/// exercise this without touching the process environment.
pub fn apply_env(
    cfg: &mut ServiceConfig,
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<()> {
    for (key, value) in vars {
        match key.as_str() {
            "HOST" => cfg.server.host = value,
            "PORT" => {
                cfg.server.port = value
                    .parse()
                    .map_err(|e| SpanLabError::BadRequest(format!("PORT must be a port number: {e}")))?;
            }
            _ => {}
        }
    }
    Ok(())
}
