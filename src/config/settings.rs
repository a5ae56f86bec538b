use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Runtime settings.
///
/// Sources, later ones win:
/// 1. built-in defaults
/// 2. `config/settings.{toml,yaml,json,...}` if present
/// 3. `MENU__*` environment variables, e.g. `MENU__SERVER__PORT=9000`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    /// Capacity of the menu store's request channel.
    pub buffer_size: usize,
    /// Preload the demo espresso bar items at startup.
    pub seed_demo_items: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            store: StoreConfig {
                buffer_size: 32,
                seed_demo_items: false,
            },
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Settings::default();
        let config = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("store.buffer_size", defaults.store.buffer_size as i64)?
            .set_default("store.seed_demo_items", defaults.store.seed_demo_items)?
            .add_source(File::with_name("config/settings").required(false))
            .add_source(
                Environment::with_prefix("MENU")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        if settings.store.buffer_size == 0 {
            return Err(ConfigError::Message(
                "store.buffer_size must be greater than 0".to_string(),
            ));
        }
        Ok(settings)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.server.host.parse().map_err(|e| {
            ConfigError::Message(format!("invalid server.host {:?}: {}", self.server.host, e))
        })?;
        Ok(SocketAddr::from((ip, self.server.port)))
    }
}
