//! Tauri command-backed external webview control.

use browser_host::{WebviewBounds, WebviewFuture, WebviewService};

#[derive(Debug, Clone, Copy, Default)]
/// Webview service driving the native external content webview.
pub struct TauriWebviewService;

impl WebviewService for TauriWebviewService {
    fn navigate_url<'a>(&'a self, url: &'a str) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::navigate_url(url).await })
    }

    fn app_webview_bounds<'a>(&'a self) -> WebviewFuture<'a, Result<WebviewBounds, String>> {
        Box::pin(async move { crate::bridge::app_webview_bounds().await })
    }

    fn set_external_webview_bounds<'a>(
        &'a self,
        bounds: WebviewBounds,
    ) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::set_external_webview_bounds(bounds).await })
    }

    fn show_external_webview<'a>(&'a self) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::show_external_webview().await })
    }

    fn hide_external_webview<'a>(&'a self) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::hide_external_webview().await })
    }
}
