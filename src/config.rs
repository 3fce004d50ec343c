use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::time::Duration;

use crate::errors::JobTrackerError;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE: &str = "jobs";
const DEFAULT_COLLECTION: &str = "jobs";
const DEFAULT_TIMEOUT: u64 = 10;

/// Contents of the .jobtrackerrc file, every key is optional.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub port: Option<u16>,
    pub database: Option<String>,
    pub collection: Option<String>,
    pub timeout: Option<u64>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, JobTrackerError> {
        let path = shellexpand::tilde(path).into_owned();

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No config file found at {}, using defaults", path);
                Ok(Self::default())
            }
            Err(err) => Err(JobTrackerError::ReadConfigFile { source: err }),
        }
    }

    pub fn parse(content: &str) -> Result<Self, JobTrackerError> {
        toml::from_str(content).map_err(|err| JobTrackerError::ParseConfigFile { source: err })
    }
}

#[derive(Debug, PartialEq)]
pub struct Settings {
    pub port: u16,
    pub database: String,
    pub collection: String,
    pub timeout: Duration,
}

impl Settings {
    /// Command line flags win over the config file, which wins over defaults.
    pub fn resolve(matches: &clap::ArgMatches, config: Config) -> Self {
        let port = matches
            .subcommand_matches("serve")
            .and_then(|serve| serve.value_of("port"))
            .and_then(|port| port.parse().ok())
            .or(config.port)
            .unwrap_or(DEFAULT_PORT);

        let database = matches
            .value_of("database")
            .map(|s| s.to_string())
            .or(config.database)
            .unwrap_or_else(|| DEFAULT_DATABASE.to_owned());

        let collection = matches
            .value_of("collection")
            .map(|s| s.to_string())
            .or(config.collection)
            .unwrap_or_else(|| DEFAULT_COLLECTION.to_owned());

        let timeout = matches
            .value_of("timeout")
            .and_then(|timeout| timeout.parse().ok())
            .or(config.timeout)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            port,
            database,
            collection,
            timeout: Duration::from_secs(timeout),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cli;

    #[test]
    fn test_defaults() {
        let matches = cli::ask().get_matches_from(vec!["jobtracker", "serve"]);
        let settings = Settings::resolve(&matches, Config::default());

        assert_eq!(
            settings,
            Settings {
                port: 5000,
                database: "jobs".to_owned(),
                collection: "jobs".to_owned(),
                timeout: Duration::from_secs(10),
            }
        );
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let config = Config::parse(
            r#"
            port = 8080
            database = "tracker"
            timeout = 3
            "#,
        )
        .unwrap();
        let matches = cli::ask().get_matches_from(vec!["jobtracker", "serve"]);
        let settings = Settings::resolve(&matches, config);

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.database, "tracker");
        assert_eq!(settings.collection, "jobs");
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_flags_override_config_file() {
        let config = Config {
            port: Some(8080),
            database: Some("tracker".to_owned()),
            collection: Some("applications".to_owned()),
            timeout: Some(3),
        };
        let matches = cli::ask().get_matches_from(vec![
            "jobtracker",
            "--database",
            "staging",
            "--timeout",
            "1",
            "serve",
            "--port",
            "9000",
        ]);
        let settings = Settings::resolve(&matches, config);

        assert_eq!(settings.port, 9000);
        assert_eq!(settings.database, "staging");
        assert_eq!(settings.collection, "applications");
        assert_eq!(settings.timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_config_file() {
        assert!(matches!(
            Config::parse("port = \"not a number\""),
            Err(JobTrackerError::ParseConfigFile { .. })
        ));
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config = Config::load("./this/file/does/not/exist.toml").unwrap();
        assert!(config.port.is_none());
        assert!(config.database.is_none());
    }
}
