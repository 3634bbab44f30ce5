use crate::error::ConfigError;
use config::Environment;
use serde::Deserialize;

/// The listen port used when `PORT` is unset or empty.
const DEFAULT_PORT: &str = "8080";

/// The runtime settings for the service, sourced from the process environment.
///
/// All database fields are required; `PORT` falls back to [`DEFAULT_PORT`].
/// Values are kept as the raw strings the environment supplied; the numeric
/// accessors validate on demand so a bad value fails at startup, not mid-request.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_host: String,
    pub db_port: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub port: String,
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default())
    }

    /// Loads settings from an explicit environment source.
    ///
    /// Tests use this to supply a plain map instead of mutating the process
    /// environment, which is shared across the whole test binary.
    pub fn from_source(env: Environment) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .set_default("port", DEFAULT_PORT)?
            .add_source(env)
            .build()?;

        let mut settings = builder.try_deserialize::<Settings>()?;

        // An empty PORT behaves exactly like an unset one.
        if settings.port.is_empty() {
            settings.port = DEFAULT_PORT.to_string();
        }

        Ok(settings)
    }

    /// The TCP port the HTTP server binds.
    pub fn listen_port(&self) -> Result<u16, ConfigError> {
        self.port.parse().map_err(|_| {
            ConfigError::ValidationError(format!("invalid PORT value: {:?}", self.port))
        })
    }

    /// The port of the database server.
    pub fn database_port(&self) -> Result<u16, ConfigError> {
        self.db_port.parse().map_err(|_| {
            ConfigError::ValidationError(format!("invalid DB_PORT value: {:?}", self.db_port))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;

    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let mut map = Map::new();
        for (key, value) in vars {
            map.insert((*key).to_string(), (*value).to_string());
        }
        Environment::default().source(Some(map))
    }

    fn full_env() -> Vec<(&'static str, &'static str)> {
        vec![
            ("DB_HOST", "localhost"),
            ("DB_PORT", "5432"),
            ("DB_USER", "postgres"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "roster"),
            ("PORT", "3000"),
        ]
    }

    #[test]
    fn loads_all_fields_from_the_environment() {
        let settings = Settings::from_source(env_from(&full_env())).unwrap();

        assert_eq!(settings.db_host, "localhost");
        assert_eq!(settings.db_user, "postgres");
        assert_eq!(settings.db_password, "secret");
        assert_eq!(settings.db_name, "roster");
        assert_eq!(settings.database_port().unwrap(), 5432);
        assert_eq!(settings.listen_port().unwrap(), 3000);
    }

    #[test]
    fn port_defaults_when_unset() {
        let vars: Vec<_> = full_env()
            .into_iter()
            .filter(|(key, _)| *key != "PORT")
            .collect();
        let settings = Settings::from_source(env_from(&vars)).unwrap();

        assert_eq!(settings.listen_port().unwrap(), 8080);
    }

    #[test]
    fn port_defaults_when_empty() {
        let mut vars = full_env();
        vars.retain(|(key, _)| *key != "PORT");
        vars.push(("PORT", ""));
        let settings = Settings::from_source(env_from(&vars)).unwrap();

        assert_eq!(settings.listen_port().unwrap(), 8080);
    }

    #[test]
    fn missing_database_host_is_an_error() {
        let vars: Vec<_> = full_env()
            .into_iter()
            .filter(|(key, _)| *key != "DB_HOST")
            .collect();

        assert!(Settings::from_source(env_from(&vars)).is_err());
    }

    #[test]
    fn non_numeric_ports_are_rejected() {
        let mut vars = full_env();
        vars.retain(|(key, _)| *key != "PORT" && *key != "DB_PORT");
        vars.push(("PORT", "http"));
        vars.push(("DB_PORT", "default"));
        let settings = Settings::from_source(env_from(&vars)).unwrap();

        assert!(settings.listen_port().is_err());
        assert!(settings.database_port().is_err());
    }
}
