use config::{Config, ConfigError, File};
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time;

#[derive(Debug)]
pub enum Environment {
    Development,
    Production,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub service: ServiceSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Upstream member-info service.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct ServiceSettings {
    #[serde(default = "default_service_host")]
    pub host: String,
    #[serde(default)]
    pub http: ServiceHttpSettings,
}

/// `service.http.*`. Every value is optional.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct ServiceHttpSettings {
    /// Milliseconds.
    #[serde(
        default = "default_connection_timeout",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub connection_timeout: u64,
    /// Seconds.
    #[serde(
        default = "default_read_timeout",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub read_timeout: u64,
    /// Seconds.
    #[serde(
        default = "default_write_timeout",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub write_timeout: u64,
    // Not consumed by anything yet, only reported at startup.
    #[serde(
        default = "default_response_cache_seconds",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub response_cache_seconds: u64,
}

fn default_service_host() -> String {
    String::from("http://localhost:8070")
}

fn default_connection_timeout() -> u64 {
    5000
}

fn default_read_timeout() -> u64 {
    5
}

fn default_write_timeout() -> u64 {
    5
}

fn default_response_cache_seconds() -> u64 {
    3600
}

impl Default for ServiceHttpSettings {
    fn default() -> Self {
        ServiceHttpSettings {
            connection_timeout: default_connection_timeout(),
            read_timeout: default_read_timeout(),
            write_timeout: default_write_timeout(),
            response_cache_seconds: default_response_cache_seconds(),
        }
    }
}

impl Settings {
    pub fn get_address(&self) -> String {
        format!(
            "{}:{}",
            self.application.get_host(),
            self.application.get_port()
        )
    }

    pub fn get_service_host(&self) -> String {
        self.service.host.clone()
    }

    pub fn set_service_host(&mut self, new_host: String) {
        self.service.host = new_host
    }

    pub fn get_service_http(&self) -> &ServiceHttpSettings {
        &self.service.http
    }

    pub fn set_app_port(&mut self, port: u16) {
        self.application.port = port;
    }
}

impl ApplicationSettings {
    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub fn get_host(&self) -> String {
        self.host.clone()
    }
}

impl ServiceHttpSettings {
    pub fn get_connection_timeout(&self) -> time::Duration {
        time::Duration::from_millis(self.connection_timeout)
    }

    pub fn get_read_timeout(&self) -> time::Duration {
        time::Duration::from_secs(self.read_timeout)
    }

    pub fn get_write_timeout(&self) -> time::Duration {
        time::Duration::from_secs(self.write_timeout)
    }

    pub fn get_response_cache(&self) -> time::Duration {
        time::Duration::from_secs(self.response_cache_seconds)
    }
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            unknown_env => Err(format!(
                "{} is not supported environment. Use either 'development' or 'production'.",
                unknown_env
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let root_path = std::env::current_dir().map_err(|err| ConfigError::Foreign(Box::new(err)))?;
    let config_directory = root_path.join("config");
    // Uses development environment by default
    let enviroment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "development".into())
        .try_into()
        .map_err(ConfigError::Message)?;
    let config_base_filepath = config_directory.join("base");
    let config_env_filepath = config_directory.join(enviroment.as_str());

    // It merges the base configuration file with the one from the specific environment (development or production)
    let settings = Config::builder()
        .add_source(File::from(config_base_filepath).required(true))
        .add_source(File::from(config_env_filepath).required(true))
        // Merge settings from environment variables with a prefix of APP and "__" separator
        // E.g APP_SERVICE__HTTP__READ_TIMEOUT would set Settings.service.http.read_timeout
        .add_source(config::Environment::with_prefix("app").separator("__"))
        .build()?;

    tracing::info!("Application environment = {:?}", enviroment);

    // Try to convert the value from the configuration file into a Settings type
    settings.try_deserialize()
}
