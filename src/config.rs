use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub session_ttl_hours: i64,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("VETFLOW_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid VETFLOW_HOST: {e}"))?;

        let port: u16 = env_or("VETFLOW_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid VETFLOW_PORT: {e}"))?;

        let session_ttl_hours: i64 = env_or("VETFLOW_SESSION_TTL_HOURS", "24")
            .parse()
            .map_err(|e| format!("Invalid VETFLOW_SESSION_TTL_HOURS: {e}"))?;

        let log_level = env_or("VETFLOW_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            session_ttl_hours,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
