use crate::adapters::DEFAULT_NAGER_ENDPOINT;
use crate::core::ConfigProvider;
use crate::domain::ports::{SourceKind, SourceSettings};
use crate::utils::error::{CalendarError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    /// Holiday sources in fallback order.
    pub sources: Option<Vec<SourceConfig>>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub r#type: SourceKind,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalendarError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalendarError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NAGER_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalendarError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", self.host())?;
        validation::validate_range("server.port", self.port(), 1, u16::MAX)?;

        let sources = self.sources();
        if sources.is_empty() {
            return Err(CalendarError::ConfigValidationError {
                field: "sources".to_string(),
                message: "at least one holiday source is required".to_string(),
            });
        }

        validation::validate_unique_names("sources.name", sources.iter().map(|s| s.name.as_str()))?;
        for source in &sources {
            validation::validate_non_empty_string("sources.name", &source.name)?;
            validation::validate_header_value("sources.name", &source.name)?;
            if source.kind == SourceKind::Nager {
                validation::validate_url("sources.endpoint", &source.endpoint)?;
                validation::validate_positive_number("sources.timeout_seconds", source.timeout_seconds, 1)?;
            }
        }

        Ok(())
    }
}

/// Nager.Date first, then the built-in country list.
pub fn default_sources(endpoint: &str, timeout_seconds: u64) -> Vec<SourceSettings> {
    vec![
        SourceSettings {
            name: "nager".to_string(),
            kind: SourceKind::Nager,
            endpoint: endpoint.to_string(),
            timeout_seconds,
            headers: Vec::new(),
        },
        SourceSettings {
            name: "builtin".to_string(),
            kind: SourceKind::Builtin,
            endpoint: String::new(),
            timeout_seconds,
            headers: Vec::new(),
        },
    ]
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.host.as_deref())
            .unwrap_or(DEFAULT_HOST)
    }

    fn port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(DEFAULT_PORT)
    }

    fn sources(&self) -> Vec<SourceSettings> {
        match &self.sources {
            None => default_sources(DEFAULT_NAGER_ENDPOINT, DEFAULT_TIMEOUT_SECONDS),
            Some(sources) => sources
                .iter()
                .map(|source| SourceSettings {
                    name: source.name.clone(),
                    kind: source.r#type,
                    endpoint: source.endpoint.clone().unwrap_or_else(|| match source.r#type {
                        SourceKind::Nager => DEFAULT_NAGER_ENDPOINT.to_string(),
                        SourceKind::Builtin => String::new(),
                    }),
                    timeout_seconds: source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
                    headers: source
                        .headers
                        .as_ref()
                        .map(|h| h.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
                        .unwrap_or_default(),
                })
                .collect(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080

[[sources]]
name = "nager"
type = "nager"
endpoint = "https://date.nager.at/api/v3"
timeout_seconds = 3

[sources.headers]
x-api-key = "abc"

[[sources]]
name = "fallback"
type = "builtin"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 8080);
        assert!(config.verbose());
        assert!(!config.json_logs());

        let sources = config.sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].kind, SourceKind::Nager);
        assert_eq!(sources[0].timeout_seconds, 3);
        assert_eq!(sources[0].headers, vec![("x-api-key".to_string(), "abc".to_string())]);
        assert_eq!(sources[1].kind, SourceKind::Builtin);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.port(), DEFAULT_PORT);
        let names: Vec<_> = config.sources().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["nager", "builtin"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VACATION_CALENDAR_TEST_ENDPOINT", "https://holidays.internal/api");

        let toml_content = r#"
[[sources]]
name = "mirror"
type = "nager"
endpoint = "${VACATION_CALENDAR_TEST_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.sources()[0].endpoint, "https://holidays.internal/api");

        std::env::remove_var("VACATION_CALENDAR_TEST_ENDPOINT");
    }

    #[test]
    fn test_unknown_source_type_is_rejected() {
        let toml_content = r#"
[[sources]]
name = "calendarific"
type = "calendarific"
"#;
        assert!(TomlConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_config_validation() {
        let invalid_endpoint = r#"
[[sources]]
name = "nager"
type = "nager"
endpoint = "invalid-url"
"#;
        let config = TomlConfig::from_toml_str(invalid_endpoint).unwrap();
        assert!(config.validate().is_err());

        let duplicate_names = r#"
[[sources]]
name = "a"
type = "builtin"

[[sources]]
name = "a"
type = "builtin"
"#;
        let config = TomlConfig::from_toml_str(duplicate_names).unwrap();
        assert!(config.validate().is_err());

        let no_sources = "sources = []";
        let config = TomlConfig::from_toml_str(no_sources).unwrap();
        assert!(config.validate().is_err());

        let control_char_name = r#"
[[sources]]
name = "nager\u0007"
type = "builtin"
"#;
        let config = TomlConfig::from_toml_str(control_char_name).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sources.name"));

        let zero_port = "[server]\nport = 0";
        let config = TomlConfig::from_toml_str(zero_port).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
port = 9090
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.port(), 9090);
    }

    #[test]
    fn test_hostname_passes_validation() {
        for host in ["localhost", "::", "127.0.0.1"] {
            let toml_content = format!("[server]\nhost = \"{}\"\nport = 8080", host);
            let config = TomlConfig::from_toml_str(&toml_content).unwrap();
            assert_eq!(config.host(), host);
            assert!(config.validate().is_ok());
        }
    }
}
