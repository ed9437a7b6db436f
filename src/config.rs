//! Site configuration with build-time overrides.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page ships as a static WASM bundle, so there is no runtime environment
//! to read. Overrides are captured from the build environment with
//! `option_env!` and validated here; anything malformed is reported and the
//! defaults are kept.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::color::normalize_service_hex;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";
pub const DEFAULT_AVATAR_SIZE: u32 = 1024;
pub const DEFAULT_AVATAR_BACKGROUND: &str = "0ea5e9";
pub const DEFAULT_AVATAR_COLOR: &str = "fff";

/// Largest size the avatar service renders.
pub const MAX_AVATAR_SIZE: u32 = 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
    #[error("{var} must be an integer between 16 and 1024, got '{value}'")]
    InvalidSize { var: &'static str, value: String },
    #[error("{var} must be a 3 or 6 digit hex color, got '{value}'")]
    InvalidColor { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}

/// Parameters of the generated placeholder avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarConfig {
    pub base_url: String,
    pub size: u32,
    /// Service-form hex, no `#`.
    pub background: String,
    /// Service-form hex, no `#`.
    pub color: String,
    pub bold: bool,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AVATAR_BASE_URL.to_owned(),
            size: DEFAULT_AVATAR_SIZE,
            background: DEFAULT_AVATAR_BACKGROUND.to_owned(),
            color: DEFAULT_AVATAR_COLOR.to_owned(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub avatar: AvatarConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(), avatar: AvatarConfig::default() }
    }
}

impl SiteConfig {
    /// Build config from variables present when the crate was compiled.
    ///
    /// Optional:
    /// - `PORTFOLIO_THEME_KEY`: default `theme`
    /// - `PORTFOLIO_AVATAR_BASE_URL`: default `https://ui-avatars.com/api/`
    /// - `PORTFOLIO_AVATAR_SIZE`: default 1024
    /// - `PORTFOLIO_AVATAR_BACKGROUND`: default `0ea5e9`
    /// - `PORTFOLIO_AVATAR_COLOR`: default `fff`
    pub fn from_build_env() -> Self {
        let lookup = |key: &str| -> Option<String> {
            let value = match key {
                "PORTFOLIO_THEME_KEY" => option_env!("PORTFOLIO_THEME_KEY"),
                "PORTFOLIO_AVATAR_BASE_URL" => option_env!("PORTFOLIO_AVATAR_BASE_URL"),
                "PORTFOLIO_AVATAR_SIZE" => option_env!("PORTFOLIO_AVATAR_SIZE"),
                "PORTFOLIO_AVATAR_BACKGROUND" => option_env!("PORTFOLIO_AVATAR_BACKGROUND"),
                "PORTFOLIO_AVATAR_COLOR" => option_env!("PORTFOLIO_AVATAR_COLOR"),
                _ => None,
            };
            value.map(str::to_owned)
        };
        match Self::from_lookup(lookup) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid site config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Build config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let theme_storage_key = match lookup("PORTFOLIO_THEME_KEY") {
            Some(v) => non_empty("PORTFOLIO_THEME_KEY", v)?,
            None => DEFAULT_THEME_STORAGE_KEY.to_owned(),
        };

        let base_url = match lookup("PORTFOLIO_AVATAR_BASE_URL") {
            Some(v) => parse_base_url("PORTFOLIO_AVATAR_BASE_URL", &v)?,
            None => DEFAULT_AVATAR_BASE_URL.to_owned(),
        };
        let size = match lookup("PORTFOLIO_AVATAR_SIZE") {
            Some(v) => parse_size("PORTFOLIO_AVATAR_SIZE", &v)?,
            None => DEFAULT_AVATAR_SIZE,
        };
        let background = match lookup("PORTFOLIO_AVATAR_BACKGROUND") {
            Some(v) => parse_color("PORTFOLIO_AVATAR_BACKGROUND", &v)?,
            None => DEFAULT_AVATAR_BACKGROUND.to_owned(),
        };
        let color = match lookup("PORTFOLIO_AVATAR_COLOR") {
            Some(v) => parse_color("PORTFOLIO_AVATAR_COLOR", &v)?,
            None => DEFAULT_AVATAR_COLOR.to_owned(),
        };

        Ok(Self { theme_storage_key, avatar: AvatarConfig { base_url, size, background, color, bold: true } })
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_owned())
}

fn parse_size(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|size| (16..=MAX_AVATAR_SIZE).contains(size))
        .ok_or_else(|| ConfigError::InvalidSize { var, value: raw.to_owned() })
}

fn parse_color(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    normalize_service_hex(raw).ok_or_else(|| ConfigError::InvalidColor { var, value: raw.to_owned() })
}

fn parse_base_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidUrl { var, value: raw.to_owned() };
    let parsed = url::Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(parsed.to_string())
}
