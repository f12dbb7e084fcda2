use config::{Config, ConfigError, Environment, File, FileFormat, Source};
use log::warn;
use serde::Deserialize;

/// How the command-line front end prints results
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sentences
    #[default]
    Text,
    /// serde_json rendering of the result types
    Json,
}

/// Main foodiq configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct FoodiqConfig {
    /// Storage temperature in °C used when the caller does not give one
    #[serde(default = "default_storage_temperature")]
    pub default_storage_temperature: f64,
    /// Output format for the CLI
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for FoodiqConfig {
    fn default() -> Self {
        Self {
            default_storage_temperature: default_storage_temperature(),
            output: OutputFormat::default(),
        }
    }
}

// Default value functions
fn default_storage_temperature() -> f64 {
    4.0
}

impl FoodiqConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FOODIQ__ prefix
    /// 2. foodiq.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FOODIQ__DEFAULT_STORAGE_TEMPERATURE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Like [`load`](Self::load), but logs a warning and falls back to
    /// defaults when the file or environment holds bad values
    pub fn load_or_default() -> Self {
        or_default(load_config())
    }

    /// Parse configuration from an in-memory TOML document, without env overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// Load configuration from file and environment variables
///
/// See [`FoodiqConfig::load`] for source priority.
pub fn load_config() -> Result<FoodiqConfig, ConfigError> {
    // Optional config file (can be missing)
    build_config(File::with_name("foodiq").required(false), environment())
}

/// `FOODIQ__` prefixed variables, double underscore for nesting: FOODIQ__OUTPUT
fn environment() -> Environment {
    Environment::with_prefix("FOODIQ")
        .separator("__")
        .try_parsing(true)
}

fn or_default(result: Result<FoodiqConfig, ConfigError>) -> FoodiqConfig {
    result.unwrap_or_else(|e| {
        warn!("Ignoring configuration, using defaults: {}", e);
        FoodiqConfig::default()
    })
}

// Later sources override earlier ones, so env wins over the file
fn build_config<F>(file: F, env: Environment) -> Result<FoodiqConfig, ConfigError>
where
    F: Source + Send + Sync + 'static,
{
    Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_storage_temperature(), 4.0);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_config_default() {
        let config = FoodiqConfig::default();
        assert_eq!(config.default_storage_temperature, 4.0);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = FoodiqConfig::from_toml_str("").unwrap();
        assert_eq!(config.default_storage_temperature, 4.0);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_toml_overrides() {
        let config = FoodiqConfig::from_toml_str(
            r#"
            default_storage_temperature = 18.5
            output = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_storage_temperature, 18.5);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        let result = FoodiqConfig::from_toml_str(r#"output = "yaml""#);
        assert!(result.is_err());
    }

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    const FILE_TOML: &str = r#"
        default_storage_temperature = 10.0
        output = "text"
    "#;

    #[test]
    fn test_env_overrides_file() {
        let config = build_config(
            File::from_str(FILE_TOML, FileFormat::Toml),
            env_with(&[
                ("FOODIQ__DEFAULT_STORAGE_TEMPERATURE", "-2.5"),
                ("FOODIQ__OUTPUT", "json"),
            ]),
        )
        .unwrap();

        assert_eq!(config.default_storage_temperature, -2.5);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = build_config(
            File::from_str(FILE_TOML, FileFormat::Toml),
            env_with(&[]),
        )
        .unwrap();

        assert_eq!(config.default_storage_temperature, 10.0);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_env_without_file_over_defaults() {
        let config = build_config(
            File::from_str("", FileFormat::Toml),
            env_with(&[("FOODIQ__DEFAULT_STORAGE_TEMPERATURE", "21")]),
        )
        .unwrap();

        assert_eq!(config.default_storage_temperature, 21.0);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_unrelated_env_vars_are_ignored() {
        let config = build_config(
            File::from_str("", FileFormat::Toml),
            env_with(&[("OTHER__OUTPUT", "json"), ("FOODIQOUTPUT", "json")]),
        )
        .unwrap();

        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_env_output_is_rejected() {
        let result = build_config(
            File::from_str(FILE_TOML, FileFormat::Toml),
            env_with(&[("FOODIQ__OUTPUT", "yaml")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_config_falls_back_to_defaults() {
        let config = or_default(build_config(
            File::from_str("default_storage_temperature = \"cold\"", FileFormat::Toml),
            env_with(&[("FOODIQ__OUTPUT", "yaml")]),
        ));

        assert_eq!(config.default_storage_temperature, 4.0);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_valid_config_is_kept_by_fallback() {
        let config = or_default(build_config(
            File::from_str(FILE_TOML, FileFormat::Toml),
            env_with(&[("FOODIQ__OUTPUT", "json")]),
        ));

        assert_eq!(config.default_storage_temperature, 10.0);
        assert_eq!(config.output, OutputFormat::Json);
    }
}
