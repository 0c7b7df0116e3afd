use crate::utils::error::{GeoError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GeoError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// `${VAR}` left behind by a failed substitution.
pub fn validate_resolved_placeholder(field_name: &str, value: &str) -> Result<()> {
    if value.starts_with("${") && value.ends_with('}') {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Environment variable placeholder was not resolved".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("geocode.endpoint", "https://example.com").is_ok());
        assert!(validate_url("geocode.endpoint", "http://127.0.0.1:8080/geocode").is_ok());
        assert!(validate_url("geocode.endpoint", "").is_err());
        assert!(validate_url("geocode.endpoint", "invalid-url").is_err());
        assert!(validate_url("geocode.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("geocode.api_key", "abc").is_ok());
        assert!(validate_non_empty_string("geocode.api_key", "   ").is_err());
    }

    #[test]
    fn test_validate_resolved_placeholder() {
        assert!(validate_resolved_placeholder("geocode.api_key", "real-key").is_ok());
        assert!(validate_resolved_placeholder("geocode.api_key", "${GEOCODE_API_KEY}").is_err());
    }
}
