//! Runtime configuration for the site and its admin panel.

use crate::common::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_MEDIA_CLOUD: &str = "dhzhuobu2";
pub const DEFAULT_MEDIA_PRESET: &str = "lorvens";

/// Keys that open the hidden admin session when typed in order.
pub const DEFAULT_SECRET_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

const API_URL_KEY: &str = "PROFILE_API_URL";
const MEDIA_CLOUD_KEY: &str = "PROFILE_MEDIA_CLOUD";
const MEDIA_PRESET_KEY: &str = "PROFILE_MEDIA_PRESET";
const SECRET_SEQUENCE_KEY: &str = "PROFILE_SECRET_SEQUENCE";
const WHATSAPP_KEY: &str = "PROFILE_WHATSAPP_NUMBER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub media_cloud_name: String,
    pub media_upload_preset: String,
    pub secret_sequence: Option<Vec<String>>,
    /// Digits only, country code first. Without it the messages panel
    /// hides the WhatsApp link.
    pub whatsapp_number: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            media_cloud_name: DEFAULT_MEDIA_CLOUD.to_string(),
            media_upload_preset: DEFAULT_MEDIA_PRESET.to_string(),
            secret_sequence: Some(
                DEFAULT_SECRET_SEQUENCE.iter().map(|k| k.to_string()).collect(),
            ),
            whatsapp_number: None,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration baked in at compile time. The browser bundle has
    /// no process environment, so this is what the `csr` build uses.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                API_URL_KEY => option_env!("PROFILE_API_URL"),
                MEDIA_CLOUD_KEY => option_env!("PROFILE_MEDIA_CLOUD"),
                MEDIA_PRESET_KEY => option_env!("PROFILE_MEDIA_PRESET"),
                SECRET_SEQUENCE_KEY => option_env!("PROFILE_SECRET_SEQUENCE"),
                WHATSAPP_KEY => option_env!("PROFILE_WHATSAPP_NUMBER"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = match lookup(API_URL_KEY) {
            Some(url) => validate_base_url(&url)?,
            None => defaults.api_base_url,
        };

        let media_cloud_name = lookup(MEDIA_CLOUD_KEY)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.media_cloud_name);

        let media_upload_preset = lookup(MEDIA_PRESET_KEY)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.media_upload_preset);

        let secret_sequence = match lookup(SECRET_SEQUENCE_KEY) {
            Some(raw) => parse_sequence(&raw),
            None => defaults.secret_sequence,
        };

        let whatsapp_number = lookup(WHATSAPP_KEY)
            .map(|v| v.chars().filter(char::is_ascii_digit).collect::<String>())
            .filter(|v| !v.is_empty());

        Ok(Self {
            api_base_url,
            media_cloud_name,
            media_upload_preset,
            secret_sequence,
            whatsapp_number,
        })
    }

    /// Joins an endpoint such as `/api/speeches` onto the base URL.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        join_url(&self.api_base_url, endpoint)
    }
}

pub fn join_url(base: &str, endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}/{}", base, endpoint)
    }
}

fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');

    if url.is_empty() {
        return Err(ConfigError::Missing(API_URL_KEY));
    }

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            key: API_URL_KEY,
            reason: format!("expected an http(s) URL, got {:?}", raw),
        });
    }

    Ok(url.to_string())
}

// An empty value turns the hidden key sequence off entirely.
fn parse_sequence(raw: &str) -> Option<Vec<String>> {
    let keys: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();

    if keys.is_empty() { None } else { Some(keys) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lookup_trims_trailing_slash() {
        let config = AppConfig::from_lookup(|key| match key {
            "PROFILE_API_URL" => Some("https://api.example.org/".into()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.example.org");
        assert_eq!(
            config.endpoint_url("/api/speeches"),
            "https://api.example.org/api/speeches"
        );
    }

    #[test]
    fn test_from_lookup_fails_on_non_http_url() {
        let result = AppConfig::from_lookup(|key| match key {
            "PROFILE_API_URL" => Some("ftp://nope".into()),
            _ => None,
        });

        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_from_lookup_disables_sequence_on_empty_value() {
        let config = AppConfig::from_lookup(|key| match key {
            "PROFILE_SECRET_SEQUENCE" => Some(String::new()),
            _ => None,
        })
        .unwrap();

        assert!(config.secret_sequence.is_none());
    }
}
