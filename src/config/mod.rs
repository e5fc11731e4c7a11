use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REFRESH_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    // Connection pool
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,

    pub log_format: LogFormat,

    // Dashboard page
    pub dashboard_title: String,
    pub dashboard_currency: String,
    pub dashboard_locale: String,
    pub dashboard_refresh_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_format = match get("LOG_FORMAT").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("pretty") | Some("text") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("LOG_FORMAT must be 'pretty' or 'json', got '{other}'"),
        };

        let dashboard_refresh_secs = get("DASHBOARD_REFRESH_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .map_err(|e| anyhow::anyhow!("DASHBOARD_REFRESH_SECS: {e}"))?
            .unwrap_or(DEFAULT_REFRESH_SECS);
        if dashboard_refresh_secs == 0 {
            anyhow::bail!("DASHBOARD_REFRESH_SECS must be at least 1");
        }

        Ok(Self {
            database_url: get("DATABASE_URL")
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: get("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .map_err(|e| anyhow::anyhow!("PORT: {e}"))?
                .unwrap_or(DEFAULT_PORT),

            db_max_connections: get("DB_MAX_CONNECTIONS")
                .map(|v| v.parse::<u32>())
                .transpose()
                .map_err(|e| anyhow::anyhow!("DB_MAX_CONNECTIONS: {e}"))?
                .unwrap_or(10),
            db_acquire_timeout_secs: get("DB_ACQUIRE_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .map_err(|e| anyhow::anyhow!("DB_ACQUIRE_TIMEOUT_SECS: {e}"))?
                .unwrap_or(5),

            log_format,

            dashboard_title: get("DASHBOARD_TITLE").unwrap_or_else(|| "Account Dashboard".into()),
            dashboard_currency: get("DASHBOARD_CURRENCY")
                .map(|c| c.trim().to_uppercase())
                .unwrap_or_else(|| "USD".into()),
            dashboard_locale: get("DASHBOARD_LOCALE").unwrap_or_else(|| "en-US".into()),
            dashboard_refresh_secs,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
