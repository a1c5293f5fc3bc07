use anyhow::{Context, Result, ensure};

use super::{
    config_model::{BackendServer, Database, DotEnvyConfig},
    stage::Stage,
};

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    load_from(|key| std::env::var(key).ok())
}

/// Builds the configuration from any key lookup, `load` passes the process environment.
pub fn load_from<F>(lookup: F) -> Result<DotEnvyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let backend_server = BackendServer {
        port: parse_required(&lookup, "SERVER_PORT_BACKEND")?,
        body_limit: parse_required(&lookup, "SERVER_BODY_LIMIT")?,
        timeout: parse_required(&lookup, "SERVER_TIMEOUT")?,
    };
    ensure!(
        backend_server.body_limit_bytes().is_some(),
        "SERVER_BODY_LIMIT is invalid"
    );

    let database = Database {
        url: required(&lookup, "DATABASE_URL")?,
        max_connections: match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .trim()
                .parse()
                .context("DATABASE_MAX_CONNECTIONS is invalid")?,
            None => DEFAULT_MAX_CONNECTIONS,
        },
    };
    ensure!(
        database.max_connections > 0,
        "DATABASE_MAX_CONNECTIONS is invalid"
    );

    let stage = lookup("STAGE")
        .map(|stage| Stage::try_from(&stage).unwrap_or_default())
        .unwrap_or_default();

    Ok(DotEnvyConfig {
        backend_server,
        database,
        stage,
    })
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("{} is invalid", key))
}

fn parse_required<F, T>(lookup: &F, key: &str) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    required(lookup, key)?
        .trim()
        .parse()
        .with_context(|| format!("{} is invalid", key))
}
