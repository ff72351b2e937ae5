use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::NaiveDate;
use ordo_core::CycleStyle;

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_path: PathBuf,
    pub bible_dir: PathBuf,
    pub static_dir: PathBuf,
    pub cycle_style: CycleStyle,
    /// Serve this day instead of the local date.
    pub fixed_date: Option<NaiveDate>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration from any variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = var("ORDO_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("ORDO_LISTEN_ADDR", "must be a valid socket address")
            })?;

        let data_path = var("ORDO_DATA_PATH")
            .unwrap_or_else(|| "ordo_data/ordo_2025.json".to_string())
            .into();

        let bible_dir = var("ORDO_BIBLE_DIR")
            .unwrap_or_else(|| "bible_data/formats/json".to_string())
            .into();

        let static_dir = var("ORDO_STATIC_DIR")
            .unwrap_or_else(|| "static".to_string())
            .into();

        let cycle_style = match var("ORDO_CYCLE_STYLE") {
            Some(s) if !s.is_empty() => s.parse().map_err(|_| {
                ConfigError::Invalid("ORDO_CYCLE_STYLE", "must be \"liturgical\" or \"plain\"")
            })?,
            _ => CycleStyle::default(),
        };

        let fixed_date = match var("ORDO_DATE") {
            Some(s) if !s.is_empty() => Some(
                NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|_| ConfigError::Invalid("ORDO_DATE", "must be YYYY-MM-DD"))?,
            ),
            _ => None,
        };

        Ok(Config {
            listen_addr,
            data_path,
            bible_dir,
            static_dir,
            cycle_style,
            fixed_date,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.data_path, PathBuf::from("ordo_data/ordo_2025.json"));
        assert_eq!(config.bible_dir, PathBuf::from("bible_data/formats/json"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.cycle_style, CycleStyle::Liturgical);
        assert_eq!(config.fixed_date, None);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ORDO_LISTEN_ADDR", "127.0.0.1:8000"),
            ("ORDO_CYCLE_STYLE", "plain"),
            ("ORDO_DATE", "2025-12-25"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr.port(), 8000);
        assert_eq!(config.cycle_style, CycleStyle::Plain);
        assert_eq!(config.fixed_date, NaiveDate::from_ymd_opt(2025, 12, 25));
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("ORDO_LISTEN_ADDR", "nowhere")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for ORDO_LISTEN_ADDR: must be a valid socket address"
        );

        assert!(load(&[("ORDO_CYCLE_STYLE", "fancy")]).is_err());
        assert!(load(&[("ORDO_DATE", "12/25/2025")]).is_err());
    }
}
