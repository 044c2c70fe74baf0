//! Backend service bundle and host-strategy models for runtime composition.

use std::rc::Rc;

use crate::{
    BookmarkService, EventService, NoopBookmarkService, NoopEventService, NoopSettingsService,
    NoopWebviewService, SettingsService, WebviewService,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Tauri-hosted composition talking to the native backend.
    DesktopTauri,
    /// Composition with no-op adapters, used for plain-browser previews.
    DesktopStub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DesktopTauri => "desktop-tauri",
            Self::DesktopStub => "desktop-stub",
        }
    }
}

/// Runtime-selected backend service bundle injected into the browser runtime.
///
/// Adapter selection happens before this bundle crosses into `browser_runtime`, so the runtime
/// never names a transport.
#[derive(Clone)]
pub struct BackendServices {
    /// Bookmark tree queries and mutations.
    pub bookmarks: Rc<dyn BookmarkService>,
    /// User settings snapshots.
    pub settings: Rc<dyn SettingsService>,
    /// External webview control.
    pub webview: Rc<dyn WebviewService>,
    /// Backend push events.
    pub events: Rc<dyn EventService>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl BackendServices {
    /// Bundle of no-op services.
    pub fn noop() -> Self {
        Self {
            bookmarks: Rc::new(NoopBookmarkService),
            settings: Rc::new(NoopSettingsService),
            webview: Rc::new(NoopWebviewService),
            events: Rc::new(NoopEventService),
            host_strategy: HostStrategy::DesktopStub,
        }
    }
}

impl std::fmt::Debug for BackendServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_tokens_are_stable() {
        assert_eq!(HostStrategy::DesktopTauri.as_str(), "desktop-tauri");
        assert_eq!(HostStrategy::DesktopStub.as_str(), "desktop-stub");
        assert_eq!(
            BackendServices::noop().host_strategy,
            HostStrategy::DesktopStub
        );
    }
}
