use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEVELOPMENT: &str = "development";
pub const PRODUCTION: &str = "production";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the books service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub environment: String,
    pub port: u16,
}

impl Configuration {
    pub fn new(environment: &str) -> Self {
        Configuration {
            environment: environment.to_string(),
            port: DEFAULT_PORT,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // PORT and APP_ENV are the only recognized settings.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> LibraryResult<Self> {
        let environment = lookup("APP_ENV").unwrap_or_else(|| PRODUCTION.to_string());
        let mut config = Configuration::new(environment.trim());
        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse::<u16>().map_err(|err| LibraryError::runtime(
                format!("invalid PORT {:?}: {}", port, err).as_str(), Some("config".to_string())))?;
        }
        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == DEVELOPMENT
    }
}
