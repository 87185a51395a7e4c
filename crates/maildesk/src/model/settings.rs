//! Settings model.

use maildesk_core::ClientConfig;
use maildesk_core::config::DEFAULT_BASE_URL;
use maildesk_core::pagination::DEFAULT_PAGE_SIZE;

use crate::style::widgets::palette::ThemeMode;

/// Application settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
    /// Mail service root.
    pub api_base_url: String,
    /// Emails per list page.
    pub page_size: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppSettings {
    /// Client configuration, with the environment override applied.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base_url.clone())
            .with_page_size(self.page_size)
            .with_env_override()
    }

    /// Flips between light and dark.
    pub const fn toggle_theme(&mut self) {
        self.theme_mode = match self.theme_mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"theme_mode": "dark"}"#).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_unknown_theme_is_light() {
        let settings: AppSettings = serde_json::from_str(r#"{"theme_mode": "sepia"}"#).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_serialized_shape() {
        let mut settings = AppSettings::default();
        settings.toggle_theme();
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["theme_mode"], "dark");
        assert_eq!(value["page_size"], 5);
    }

    #[test]
    fn test_client_config_carries_page_size() {
        let settings = AppSettings {
            page_size: 10,
            ..AppSettings::default()
        };
        assert_eq!(settings.client_config().page_size, 10);
    }
}
