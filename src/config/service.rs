use crate::core::ConfigProvider;
use crate::utils::error::{GeoError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_LATENCY_URL: &str = "https://httpbin.org/delay/1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub geocode: GeocodeSection,
    #[serde(default)]
    pub latency: LatencySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeSection {
    #[serde(default = "default_geocode_endpoint")]
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencySection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_latency_url")]
    pub url: String,
}

impl Default for LatencySection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            url: default_latency_url(),
        }
    }
}

fn default_geocode_endpoint() -> String {
    DEFAULT_GEOCODE_ENDPOINT.to_string()
}

fn default_latency_url() -> String {
    DEFAULT_LATENCY_URL.to_string()
}

fn default_enabled() -> bool {
    true
}

impl ServiceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            geocode: GeocodeSection {
                endpoint: default_geocode_endpoint(),
                api_key: api_key.into(),
            },
            latency: LatencySection::default(),
        }
    }

    /// 從環境變數載入配置 (Lambda 使用)
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEOCODE_API_KEY").map_err(|_| GeoError::MissingConfigError {
            field: "GEOCODE_API_KEY".to_string(),
        })?;

        let enabled = match env::var("LATENCY_ENABLED") {
            Ok(raw) => parse_bool("LATENCY_ENABLED", &raw)?,
            Err(_) => default_enabled(),
        };

        Ok(Self {
            geocode: GeocodeSection {
                endpoint: env::var("GEOCODE_ENDPOINT").unwrap_or_else(|_| default_geocode_endpoint()),
                api_key,
            },
            latency: LatencySection {
                enabled,
                url: env::var("LATENCY_URL").unwrap_or_else(|_| default_latency_url()),
            },
        })
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GeoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GeoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換環境變數 (例如 ${GEOCODE_API_KEY})，未設定的保持原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GeoError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

fn parse_bool(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(GeoError::InvalidConfigValueError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Expected a boolean (true/false)".to_string(),
        }),
    }
}

impl ConfigProvider for ServiceConfig {
    fn geocode_endpoint(&self) -> &str {
        &self.geocode.endpoint
    }

    fn api_key(&self) -> &str {
        &self.geocode.api_key
    }

    fn latency_url(&self) -> Option<&str> {
        self.latency.enabled.then_some(self.latency.url.as_str())
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("geocode.endpoint", &self.geocode.endpoint)?;
        validation::validate_non_empty_string("geocode.api_key", &self.geocode.api_key)?;
        validation::validate_resolved_placeholder("geocode.api_key", &self.geocode.api_key)?;

        // 停用時不檢查 latency.url
        if self.latency.enabled {
            validation::validate_url("latency.url", &self.latency.url)?;
        }

        tracing::debug!("✅ Service configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[geocode]
endpoint = "https://geo.example.com/json"
api_key = "abc123"

[latency]
enabled = false
url = "https://slow.example.com/delay/3"
"#;

        let config = ServiceConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.geocode_endpoint(), "https://geo.example.com/json");
        assert_eq!(config.api_key(), "abc123");
        assert_eq!(config.latency_url(), None);
        assert_ok!(config.validate());
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config = ServiceConfig::from_toml_str("[geocode]\napi_key = \"k\"\n").unwrap();

        assert_eq!(config.geocode_endpoint(), DEFAULT_GEOCODE_ENDPOINT);
        assert_eq!(config.latency_url(), Some(DEFAULT_LATENCY_URL));
    }

    #[test]
    fn test_env_var_substitution() {
        env::set_var("GEO_LOOKUP_TEST_SUBST_KEY", "from-env");

        let toml_content = r#"
[geocode]
api_key = "${GEO_LOOKUP_TEST_SUBST_KEY}"
"#;

        let config = ServiceConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_key(), "from-env");

        env::remove_var("GEO_LOOKUP_TEST_SUBST_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let toml_content = r#"
[geocode]
api_key = "${GEO_LOOKUP_TEST_NEVER_SET}"
"#;

        let config = ServiceConfig::from_toml_str(toml_content).unwrap();
        assert_err!(config.validate());
    }

    #[test]
    fn test_invalid_urls_fail_validation() {
        let mut config = ServiceConfig::new("k");
        config.latency.url = "not-a-url".to_string();
        assert_err!(config.validate());

        // 停用後不再檢查
        config.latency.enabled = false;
        assert_ok!(config.validate());

        config.geocode.endpoint = "ftp://geo.example.com".to_string();
        assert_err!(config.validate());
    }

    #[test]
    fn test_missing_api_key_is_parse_error() {
        let result = ServiceConfig::from_toml_str("[geocode]\nendpoint = \"https://x.test\"\n");
        assert!(matches!(result, Err(GeoError::ConfigValidationError { .. })));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("LATENCY_ENABLED", "TRUE").unwrap());
        assert!(!parse_bool("LATENCY_ENABLED", "off").unwrap());
        assert!(parse_bool("LATENCY_ENABLED", "maybe").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[geocode]\napi_key = \"file-key\"\n")
            .unwrap();

        let config = ServiceConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api_key(), "file-key");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ServiceConfig::from_file("/definitely/not/here/geo-lookup.toml");
        assert!(matches!(result, Err(GeoError::IoError(_))));
    }
}
