use super::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub backend_server: BackendServer,
    pub database: Database,
    pub stage: Stage,
}

#[derive(Debug, Clone)]
pub struct BackendServer {
    pub port: u16,
    /// Request body limit in MiB.
    pub body_limit: u64,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl BackendServer {
    /// `None` when the MiB value does not fit in a byte count.
    pub fn body_limit_bytes(&self) -> Option<usize> {
        self.body_limit
            .checked_mul(1024 * 1024)
            .and_then(|bytes| usize::try_from(bytes).ok())
    }
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
}
