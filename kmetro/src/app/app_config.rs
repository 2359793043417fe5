use std::time::Duration;

use config::{Config, Environment, FileFormat};
use kmetro_core::dataset::DatasetSourceConfig;
use serde::{Deserialize, Serialize};

use super::KmetroAppError;
use crate::position::{
    InterpolationPolicy, SystemClock, DEFAULT_TICK_INTERVAL, KOCHI_UTC_OFFSET_MINUTES,
};
use crate::schedule::{DEFAULT_BOARD_LIMIT, DEFAULT_DEPARTURE_LIMIT};

const ENV_PREFIX: &str = "KMETRO";
const ENV_SEPARATOR: &str = "__";

/// settings for the `kmetro` command line tool.
///
/// every section is optional. values are layered as built-in defaults, then
/// the TOML file passed with `--config`, then `KMETRO_*` environment
/// variables, e.g. `KMETRO_DEPARTURES__LIMIT=10` or
/// `KMETRO_DATASET__TYPE=http` with `KMETRO_DATASET__BASE_URL=...`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct KmetroConfig {
    #[serde(default)]
    pub dataset: DatasetSourceConfig,
    #[serde(default)]
    pub departures: DeparturesConfig,
    #[serde(default)]
    pub positions: PositionsConfig,
    #[serde(default)]
    pub clock: ClockConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeparturesConfig {
    /// departures listed for an origin/destination query
    #[serde(default = "default_departure_limit")]
    pub limit: usize,
    /// departures listed per direction on a station board
    #[serde(default = "default_board_limit")]
    pub board_limit: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PositionsConfig {
    #[serde(default)]
    pub interpolation: InterpolationPolicy,
    /// recomputation period of the `watch` ticker
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClockConfig {
    /// offset of local service time from UTC
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

impl KmetroConfig {
    /// reads the layered configuration, with `config_file` as the optional
    /// TOML layer.
    pub fn load(config_file: Option<&str>) -> Result<KmetroConfig, KmetroAppError> {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .try_parsing(true);
        Self::build(config_file, environment)
    }

    fn build(
        config_file: Option<&str>,
        environment: Environment,
    ) -> Result<KmetroConfig, KmetroAppError> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(config::File::new(path, FileFormat::Toml));
        }
        let source = config_file.unwrap_or("defaults");
        let config = builder
            .add_source(environment)
            .build()
            .map_err(|e| KmetroAppError::ConfigReadError {
                msg: format!("failed reading '{source}'"),
                source: e,
            })?;
        let kmetro_config = config.try_deserialize::<KmetroConfig>().map_err(|e| {
            KmetroAppError::ConfigReadError {
                msg: format!("failed deserializing '{source}'"),
                source: e,
            }
        })?;
        kmetro_config.validate()?;
        log::debug!("loaded configuration from {source}: {kmetro_config:?}");
        Ok(kmetro_config)
    }

    fn validate(&self) -> Result<(), KmetroAppError> {
        if self.positions.tick_interval_ms == 0 {
            return Err(KmetroAppError::InvalidConfig(String::from(
                "positions.tick_interval_ms must be positive",
            )));
        }
        self.clock.system_clock().map(|_| ())
    }
}

impl PositionsConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl ClockConfig {
    pub fn system_clock(&self) -> Result<SystemClock, KmetroAppError> {
        SystemClock::from_offset_minutes(self.utc_offset_minutes).ok_or_else(|| {
            KmetroAppError::InvalidConfig(format!(
                "clock.utc_offset_minutes {} is out of range",
                self.utc_offset_minutes
            ))
        })
    }
}

impl Default for DeparturesConfig {
    fn default() -> Self {
        DeparturesConfig {
            limit: default_departure_limit(),
            board_limit: default_board_limit(),
        }
    }
}

impl Default for PositionsConfig {
    fn default() -> Self {
        PositionsConfig {
            interpolation: InterpolationPolicy::default(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

fn default_departure_limit() -> usize {
    DEFAULT_DEPARTURE_LIMIT
}

fn default_board_limit() -> usize {
    DEFAULT_BOARD_LIMIT
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL.as_millis() as u64
}

fn default_utc_offset_minutes() -> i32 {
    KOCHI_UTC_OFFSET_MINUTES
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{collections::HashMap, io::Write};

    fn no_env() -> Environment {
        Environment::default().source(Some(HashMap::new()))
    }

    #[test]
    fn test_defaults() {
        let config = KmetroConfig::build(None, no_env()).expect("defaults are valid");
        assert_eq!(config, KmetroConfig::default());
        assert_eq!(config.departures.limit, 6);
        assert_eq!(config.departures.board_limit, 3);
        assert_eq!(config.positions.interpolation, InterpolationPolicy::RouteFollowing);
        assert_eq!(config.positions.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.clock.utc_offset_minutes, 330);
    }

    #[test]
    fn test_toml_file_then_environment() {
        let path = std::env::temp_dir().join("kmetro_app_config_test.toml");
        let mut file = std::fs::File::create(&path).expect("temp file");
        writeln!(
            file,
            r#"
[dataset]
type = "http"
base_url = "https://example.org/kochi/"
timeout_secs = 5

[departures]
limit = 4

[positions]
interpolation = "linear"
"#
        )
        .expect("write temp file");

        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(Some(HashMap::from([(
                String::from("KMETRO_DEPARTURES__LIMIT"),
                String::from("9"),
            )])));
        let path_str = path.to_str().expect("utf-8 temp path");
        let config = KmetroConfig::build(Some(path_str), env).expect("valid config");
        assert_eq!(
            config.dataset,
            DatasetSourceConfig::Http {
                base_url: String::from("https://example.org/kochi/"),
                timeout_secs: Some(5),
            }
        );
        assert_eq!(config.departures.limit, 9);
        assert_eq!(config.departures.board_limit, 3);
        assert_eq!(config.positions.interpolation, InterpolationPolicy::Linear);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_rejects_zero_tick_interval() {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(Some(HashMap::from([(
                String::from("KMETRO_POSITIONS__TICK_INTERVAL_MS"),
                String::from("0"),
            )])));
        let result = KmetroConfig::build(None, env);
        assert!(matches!(result, Err(KmetroAppError::InvalidConfig(_))));
    }
}
