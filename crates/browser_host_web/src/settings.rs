//! Tauri command-backed user settings service.

use browser_host::{SettingsFuture, SettingsService, UserSettings};

#[derive(Debug, Clone, Copy, Default)]
/// Settings service reading the native user-settings snapshot.
pub struct TauriSettingsService;

impl SettingsService for TauriSettingsService {
    fn user_settings<'a>(&'a self) -> SettingsFuture<'a, Result<UserSettings, String>> {
        Box::pin(async move { crate::bridge::user_settings().await })
    }
}
