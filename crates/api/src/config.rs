/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Time allowed for in-flight requests to drain after a shutdown
    /// signal, in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Run the dashboard reads inside one read-only `REPEATABLE READ`
    /// transaction (default: `true`). When off, the reads may observe
    /// writes that land between them.
    pub dashboard_consistent_reads: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                    |
    /// |------------------------------|----------------------------|
    /// | `HOST`                       | `0.0.0.0`                  |
    /// | `PORT`                       | `3000`                     |
    /// | `CORS_ORIGINS`               | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`      | `30`                       |
    /// | `DASHBOARD_CONSISTENT_READS` | `true`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let dashboard_consistent_reads: bool = std::env::var("DASHBOARD_CONSISTENT_READS")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("DASHBOARD_CONSISTENT_READS must be `true` or `false`");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            dashboard_consistent_reads,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
