use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{Availability, FacultyProfile};

/// Prefix for environment overrides, e.g. FACULTY_MATCH__SERVER__PORT -> server.port
const ENV_PREFIX: &str = "FACULTY_MATCH";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Advisors loaded into the catalog at startup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub faculty: Vec<FacultySeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacultySeed {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub expertise_areas: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default = "default_seed_rating")]
    pub rating: f64,
    #[serde(default)]
    pub availability: Availability,
}

fn default_seed_rating() -> f64 { 4.0 }

impl From<FacultySeed> for FacultyProfile {
    fn from(seed: FacultySeed) -> Self {
        FacultyProfile {
            id: seed.id,
            name: seed.name,
            expertise_areas: seed.expertise_areas,
            experience_years: seed.experience_years,
            rating: seed.rating,
            availability: seed.availability,
        }
    }
}

impl CatalogSettings {
    pub fn profiles(&self) -> Vec<FacultyProfile> {
        self.faculty.iter().cloned().map(FacultyProfile::from).collect()
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FACULTY_MATCH)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str("", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.logging.format, "json");
        assert!(settings.catalog.faculty.is_empty());
    }

    #[test]
    fn test_faculty_seed_parsing() {
        let toml = r#"
            [server]
            port = 8080

            [[catalog.faculty]]
            id = 1
            name = "Dr. Alice AI"
            expertise_areas = ["AI", "ML"]
            experience_years = 10
            rating = 4.7

            [[catalog.faculty]]
            id = 2
            name = "Dr. Bob IoT"
            availability = "Limited"
        "#;

        let settings: Settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let profiles = settings.catalog.profiles();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].expertise_areas, vec!["AI", "ML"]);
        assert_eq!(profiles[1].rating, 4.0);
        assert_eq!(profiles[1].availability, Availability::Limited);
    }
}
