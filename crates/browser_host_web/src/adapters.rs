use std::rc::Rc;

use browser_host::{
    BackendServices, HostStrategy, NoopBookmarkService, NoopEventService, NoopSettingsService,
    NoopWebviewService,
};

use crate::{TauriBookmarkService, TauriEventService, TauriSettingsService, TauriWebviewService};

#[cfg(all(feature = "desktop-host-stub", feature = "desktop-host-tauri"))]
compile_error!(
    "features `desktop-host-stub` and `desktop-host-tauri` are mutually exclusive; enable only one"
);

/// Returns the compile-time selected host strategy for the active build.
///
/// Builds without `desktop-host-tauri` fall back to the stub strategy so the UI can be previewed
/// in a plain browser tab.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-tauri")]
    {
        HostStrategy::DesktopTauri
    }

    #[cfg(not(feature = "desktop-host-tauri"))]
    {
        HostStrategy::DesktopStub
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the backend service bundle for the compile-time selected host strategy.
pub fn build_backend_services() -> BackendServices {
    build_backend_services_for(selected_host_strategy())
}

/// Builds the backend service bundle for an explicit `strategy`.
pub fn build_backend_services_for(strategy: HostStrategy) -> BackendServices {
    match strategy {
        HostStrategy::DesktopTauri => BackendServices {
            bookmarks: Rc::new(TauriBookmarkService),
            settings: Rc::new(TauriSettingsService),
            webview: Rc::new(TauriWebviewService),
            events: Rc::new(TauriEventService),
            host_strategy: strategy,
        },
        HostStrategy::DesktopStub => BackendServices {
            bookmarks: Rc::new(NoopBookmarkService),
            settings: Rc::new(NoopSettingsService),
            webview: Rc::new(NoopWebviewService),
            events: Rc::new(NoopEventService),
            host_strategy: strategy,
        },
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(feature = "desktop-host-tauri"))]
    #[test]
    fn default_build_selects_stub_strategy() {
        assert_eq!(selected_host_strategy(), HostStrategy::DesktopStub);
        assert_eq!(host_strategy_name(), "desktop-stub");
    }

    #[test]
    fn stub_bundle_serves_empty_backend() {
        let services = build_backend_services_for(HostStrategy::DesktopStub);
        assert_eq!(services.host_strategy, HostStrategy::DesktopStub);
        assert_eq!(
            block_on(services.bookmarks.root_and_children_folders()).expect("folders"),
            Vec::new()
        );
        assert_eq!(
            block_on(services.settings.user_settings()).expect("settings"),
            browser_host::UserSettings::default()
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn tauri_bundle_reports_transport_errors_off_wasm() {
        let services = build_backend_services_for(HostStrategy::DesktopTauri);
        assert_eq!(services.host_strategy, HostStrategy::DesktopTauri);
        assert!(block_on(services.webview.show_external_webview()).is_err());
    }
}
