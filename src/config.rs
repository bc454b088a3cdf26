use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime settings, read from `GRIDWALK_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Number of HTTP worker threads; `None` keeps actix's per-core default.
    pub workers: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

impl Settings {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, String> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(format!("Failed to load .env file: {e}"));
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(host) = lookup("GRIDWALK_HOST").filter(|h| !h.trim().is_empty()) {
            settings.host = host.trim().to_string();
        }
        if let Some(port) = lookup("GRIDWALK_PORT") {
            settings.port = port
                .trim()
                .parse()
                .map_err(|e| format!("GRIDWALK_PORT must be a port number, got '{port}': {e}"))?;
        }
        if let Some(workers) = lookup("GRIDWALK_WORKERS") {
            let count: usize = workers.trim().parse().map_err(|e| {
                format!("GRIDWALK_WORKERS must be a positive integer, got '{workers}': {e}")
            })?;
            if count == 0 {
                return Err("GRIDWALK_WORKERS must be at least 1.".into());
            }
            settings.workers = Some(count);
        }
        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
