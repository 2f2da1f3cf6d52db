use shared::clients::config::CompletionConfig;
use shared::clients::errors::config_errors::ConfigError;
use shared::services::user_service::{DEFAULT_HASH_COST, MAX_HASH_COST, MIN_HASH_COST};

pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const BCRYPT_COST_VAR: &str = "BCRYPT_COST";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// bcrypt work factor for new account passwords.
    pub password_hash_cost: u32,
    pub completion: CompletionConfig,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let completion = CompletionConfig::from_lookup(&lookup)?;
        let host = lookup(HOST_VAR)
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_VAR).filter(|port| !port.trim().is_empty()) {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidVar {
                name: PORT_VAR,
                reason: format!("{}", e),
            })?,
            None => DEFAULT_PORT,
        };
        let password_hash_cost = match lookup(BCRYPT_COST_VAR).filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => parse_hash_cost(raw.trim())?,
            None => DEFAULT_HASH_COST,
        };

        Ok(AppConfig {
            host,
            port,
            password_hash_cost,
            completion,
        })
    }

    /// Host and port for `TcpListener::bind`. The host may be a name such as
    /// `localhost`; it is resolved at bind time.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn parse_hash_cost(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidVar {
        name: BCRYPT_COST_VAR,
        reason,
    };
    let cost: u32 = raw.parse().map_err(|e| invalid(format!("{}", e)))?;
    if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) {
        return Err(invalid(format!(
            "must be between {} and {}, got {}",
            MIN_HASH_COST,
            MAX_HASH_COST,
            cost
        )));
    }
    Ok(cost)
}
