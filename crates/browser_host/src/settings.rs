//! User settings snapshot model and backend service contract.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Start page used when the backend has no stored preference.
pub const DEFAULT_START_PAGE_URL: &str = "https://www.google.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Backend-owned user settings snapshot.
pub struct UserSettings {
    /// Whether webviews may use hardware acceleration (takes effect after restart).
    pub gpu_acceleration_enabled: bool,
    /// Whether webviews run in private browsing mode (takes effect after restart).
    pub incognito: bool,
    /// Page opened in the external webview on startup.
    pub start_page_url: String,
    /// URLs pinned to the toolbar, in display order.
    #[serde(default)]
    pub pinned_urls: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            gpu_acceleration_enabled: true,
            incognito: false,
            start_page_url: DEFAULT_START_PAGE_URL.to_string(),
            pinned_urls: Vec::new(),
        }
    }
}

/// Object-safe boxed future used by [`SettingsService`] async methods.
pub type SettingsFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Backend service owning user settings.
pub trait SettingsService {
    /// Loads the current settings snapshot.
    fn user_settings<'a>(&'a self) -> SettingsFuture<'a, Result<UserSettings, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op settings service returning defaults.
pub struct NoopSettingsService;

impl SettingsService for NoopSettingsService {
    fn user_settings<'a>(&'a self) -> SettingsFuture<'a, Result<UserSettings, String>> {
        Box::pin(async { Ok(UserSettings::default()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory settings service whose snapshot can be replaced by tests.
pub struct MemorySettingsService {
    inner: Rc<RefCell<UserSettings>>,
}

impl MemorySettingsService {
    /// Creates a service serving `settings`.
    pub fn new(settings: UserSettings) -> Self {
        Self {
            inner: Rc::new(RefCell::new(settings)),
        }
    }

    /// Replaces the served snapshot.
    pub fn replace(&self, settings: UserSettings) {
        *self.inner.borrow_mut() = settings;
    }
}

impl SettingsService for MemorySettingsService {
    fn user_settings<'a>(&'a self) -> SettingsFuture<'a, Result<UserSettings, String>> {
        Box::pin(async move { Ok(self.inner.borrow().clone()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pinned_urls_default_to_empty_when_missing() {
        let settings: UserSettings = serde_json::from_str(
            r#"{"gpu_acceleration_enabled": false, "incognito": true, "start_page_url": "https://example.com"}"#,
        )
        .expect("parse settings");

        assert_eq!(
            settings,
            UserSettings {
                gpu_acceleration_enabled: false,
                incognito: true,
                start_page_url: "https://example.com".to_string(),
                pinned_urls: Vec::new(),
            }
        );
    }

    #[test]
    fn memory_settings_serve_latest_snapshot() {
        let service = MemorySettingsService::default();
        let service_obj: &dyn SettingsService = &service;
        assert_eq!(
            block_on(service_obj.user_settings()).expect("load"),
            UserSettings::default()
        );

        let updated = UserSettings {
            incognito: true,
            pinned_urls: vec!["https://docs.rs".to_string()],
            ..UserSettings::default()
        };
        service.replace(updated.clone());
        assert_eq!(block_on(service_obj.user_settings()).expect("load"), updated);
    }
}
