use anyhow::{Context, Result};

use super::{
    config_model::{BackendServer, Database, DotEnvyConfig},
    stage::Stage,
};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BODY_LIMIT_MB: u64 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    load_from(|key| std::env::var(key).ok())
}

fn load_from(var: impl Fn(&str) -> Option<String>) -> Result<DotEnvyConfig> {
    let backend_server = BackendServer {
        port: parse_or(&var, "SERVER_PORT_BACKEND", DEFAULT_PORT)?,
        body_limit: parse_or(&var, "SERVER_BODY_LIMIT", DEFAULT_BODY_LIMIT_MB)?,
        timeout: parse_or(&var, "SERVER_TIMEOUT", DEFAULT_TIMEOUT_SECS)?,
    };
    backend_server.body_limit_bytes()?;

    let database = Database {
        url: var("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .context("DATABASE_URL is invalid")?,
        max_connections: parse_or(&var, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
    };

    let stage = Stage::try_from(&var("STAGE").unwrap_or_default()).unwrap_or_default();

    Ok(DotEnvyConfig {
        backend_server,
        database,
        stage,
    })
}

fn parse_or<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is invalid")),
        None => Ok(default),
    }
}
