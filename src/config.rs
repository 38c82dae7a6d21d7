/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dispatcher: DispatcherConfig,
    pub shell: ShellConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DispatcherConfig {
    pub n_elevators: i64,
    pub step_on_status: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    // Milliseconds between automatic steps, 0 turns it off
    pub auto_step_interval: u64,
    pub json_status: bool,
    pub status_after_request: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        DispatcherConfig {
            n_elevators: 4,
            step_on_status: true,
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            auto_step_interval: 0,
            json_status: false,
            status_after_request: true,
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = match fs::read_to_string(path) {
        Ok(config_str) => config_str,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("No configuration file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    };

    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [dispatcher]
            n_elevators = 2
            step_on_status = false

            [shell]
            auto_step_interval = 500
            json_status = true
            status_after_request = false
            "#,
        )
        .unwrap();

        assert_eq!(config.dispatcher.n_elevators, 2);
        assert!(!config.dispatcher.step_on_status);
        assert_eq!(config.shell.auto_step_interval, 500);
        assert!(config.shell.json_status);
        assert!(!config.shell.status_after_request);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config("[dispatcher]\nn_elevators = 6\n").unwrap();

        assert_eq!(config.dispatcher.n_elevators, 6);
        assert!(config.dispatcher.step_on_status);
        assert_eq!(config.shell, ShellConfig::default());
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = parse_config("[dispatcher]\nn_elevators = \"many\"\n");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("does/not/exist/config.toml")).unwrap();

        assert_eq!(config, Config::default());
    }
}
