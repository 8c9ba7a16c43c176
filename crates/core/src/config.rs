//! Runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! state types, so nothing reads process-wide environment variables while
//! handling user actions. The initial view defaults to the create-food screen;
//! both it and the catalog base URL can be overridden through the environment
//! by the host binary.

use crate::view::ViewKind;

/// Default initial screen.
pub const DEFAULT_INITIAL_VIEW: ViewKind = ViewKind::CreateFood;

/// Default catalog service base URL.
pub const DEFAULT_CATALOG_URL: &str = "http://localhost:8080";

/// Errors that can occur when resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown initial view: {0} (expected \"main\" or \"create-food\")")]
    UnknownInitialView(String),
    #[error("catalog base URL cannot be empty")]
    EmptyCatalogUrl,
}

/// Application configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    initial_view: ViewKind,
    catalog_base_url: String,
}

impl AppConfig {
    pub fn new(initial_view: ViewKind, catalog_base_url: String) -> Result<Self, ConfigError> {
        if catalog_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyCatalogUrl);
        }

        Ok(Self {
            initial_view,
            catalog_base_url,
        })
    }

    /// Builds a config from optional environment values, applying defaults
    /// where a value is absent or blank.
    pub fn from_env_values(
        initial_view: Option<String>,
        catalog_base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let initial_view = initial_view_from_env_value(initial_view)?;
        let catalog_base_url = catalog_base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

        Self::new(initial_view, catalog_base_url)
    }

    pub fn initial_view(&self) -> ViewKind {
        self.initial_view
    }

    pub fn catalog_base_url(&self) -> &str {
        &self.catalog_base_url
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_view: DEFAULT_INITIAL_VIEW,
            catalog_base_url: DEFAULT_CATALOG_URL.to_string(),
        }
    }
}

/// Parse the initial view from an optional environment value.
///
/// `None` or blank means the default view.
pub fn initial_view_from_env_value(value: Option<String>) -> Result<ViewKind, ConfigError> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None => Ok(DEFAULT_INITIAL_VIEW),
        Some("main") => Ok(ViewKind::Main),
        Some("create-food") => Ok(ViewKind::CreateFood),
        Some(other) => Err(ConfigError::UnknownInitialView(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_absent() {
        let config = AppConfig::from_env_values(None, None).expect("build config");
        assert_eq!(config.initial_view(), ViewKind::CreateFood);
        assert_eq!(config.catalog_base_url(), DEFAULT_CATALOG_URL);
    }

    #[test]
    fn initial_view_override_is_honoured() {
        let config = AppConfig::from_env_values(Some("main".to_string()), None)
            .expect("build config");
        assert_eq!(config.initial_view(), ViewKind::Main);
    }

    #[test]
    fn unknown_initial_view_is_rejected() {
        let err = AppConfig::from_env_values(Some("settings".to_string()), None)
            .expect_err("should reject");
        assert!(matches!(err, ConfigError::UnknownInitialView(_)));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_env_values(Some("  ".to_string()), Some(String::new()))
            .expect("build config");
        assert_eq!(config.initial_view(), DEFAULT_INITIAL_VIEW);
        assert_eq!(config.catalog_base_url(), DEFAULT_CATALOG_URL);
    }
}
