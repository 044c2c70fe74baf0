//! External webview control contracts and window-chrome geometry.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Position and size of a webview in logical pixels.
pub struct WebviewBounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Fixed app chrome that the external webview must leave uncovered.
pub struct ShellLayout {
    /// Width of the bookmarks sidebar.
    pub sidebar_width: f64,
    /// Height of the toolbar.
    pub header_height: f64,
}

impl Default for ShellLayout {
    fn default() -> Self {
        Self {
            sidebar_width: 200.0,
            header_height: 40.0,
        }
    }
}

impl ShellLayout {
    /// Bounds for the external webview docked right of the sidebar, below the toolbar.
    pub fn right_of_sidebar(self, app: WebviewBounds) -> WebviewBounds {
        WebviewBounds {
            x: self.sidebar_width,
            y: self.header_height,
            width: (app.width - self.sidebar_width).max(0.0),
            height: (app.height - self.header_height).max(0.0),
        }
    }

    /// Bounds for the external webview covering everything below the toolbar.
    pub fn below_toolbar(self, app: WebviewBounds) -> WebviewBounds {
        WebviewBounds {
            x: 0.0,
            y: self.header_height,
            width: app.width.max(0.0),
            height: (app.height - self.header_height).max(0.0),
        }
    }
}

/// Object-safe boxed future used by [`WebviewService`] async methods.
pub type WebviewFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Backend service controlling the external content webview.
pub trait WebviewService {
    /// Navigates the external webview to `url`.
    fn navigate_url<'a>(&'a self, url: &'a str) -> WebviewFuture<'a, Result<(), String>>;

    /// Returns the bounds of the app webview hosting this UI.
    fn app_webview_bounds<'a>(&'a self) -> WebviewFuture<'a, Result<WebviewBounds, String>>;

    /// Moves and resizes the external webview.
    fn set_external_webview_bounds<'a>(
        &'a self,
        bounds: WebviewBounds,
    ) -> WebviewFuture<'a, Result<(), String>>;

    /// Shows the external webview.
    fn show_external_webview<'a>(&'a self) -> WebviewFuture<'a, Result<(), String>>;

    /// Hides the external webview.
    fn hide_external_webview<'a>(&'a self) -> WebviewFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op webview service for unsupported targets.
pub struct NoopWebviewService;

impl WebviewService for NoopWebviewService {
    fn navigate_url<'a>(&'a self, _url: &'a str) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn app_webview_bounds<'a>(&'a self) -> WebviewFuture<'a, Result<WebviewBounds, String>> {
        Box::pin(async { Err("app webview bounds unavailable".to_string()) })
    }

    fn set_external_webview_bounds<'a>(
        &'a self,
        _bounds: WebviewBounds,
    ) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn show_external_webview<'a>(&'a self) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn hide_external_webview<'a>(&'a self) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Call recorded by [`MemoryWebviewService`].
pub enum WebviewCall {
    /// `navigate_url` was invoked.
    Navigate(String),
    /// `set_external_webview_bounds` was invoked.
    SetBounds(WebviewBounds),
    /// `show_external_webview` was invoked.
    Show,
    /// `hide_external_webview` was invoked.
    Hide,
}

#[derive(Debug, Clone)]
/// In-memory webview service that records every call in order.
pub struct MemoryWebviewService {
    app_bounds: WebviewBounds,
    calls: Rc<RefCell<Vec<WebviewCall>>>,
}

impl Default for MemoryWebviewService {
    fn default() -> Self {
        Self::new(WebviewBounds {
            x: 0.0,
            y: 0.0,
            width: 1000.0,
            height: 1000.0,
        })
    }
}

impl MemoryWebviewService {
    /// Creates a service reporting `app_bounds` for the app webview.
    pub fn new(app_bounds: WebviewBounds) -> Self {
        Self {
            app_bounds,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Returns the calls recorded so far.
    pub fn calls(&self) -> Vec<WebviewCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: WebviewCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl WebviewService for MemoryWebviewService {
    fn navigate_url<'a>(&'a self, url: &'a str) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.record(WebviewCall::Navigate(url.to_string()));
            Ok(())
        })
    }

    fn app_webview_bounds<'a>(&'a self) -> WebviewFuture<'a, Result<WebviewBounds, String>> {
        Box::pin(async move { Ok(self.app_bounds) })
    }

    fn set_external_webview_bounds<'a>(
        &'a self,
        bounds: WebviewBounds,
    ) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.record(WebviewCall::SetBounds(bounds));
            Ok(())
        })
    }

    fn show_external_webview<'a>(&'a self) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.record(WebviewCall::Show);
            Ok(())
        })
    }

    fn hide_external_webview<'a>(&'a self) -> WebviewFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.record(WebviewCall::Hide);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    const APP: WebviewBounds = WebviewBounds {
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn right_panel_leaves_sidebar_and_toolbar_uncovered() {
        assert_eq!(
            ShellLayout::default().right_of_sidebar(APP),
            WebviewBounds {
                x: 200.0,
                y: 40.0,
                width: 800.0,
                height: 760.0,
            }
        );
    }

    #[test]
    fn full_panel_only_leaves_toolbar_uncovered() {
        assert_eq!(
            ShellLayout::default().below_toolbar(APP),
            WebviewBounds {
                x: 0.0,
                y: 40.0,
                width: 1000.0,
                height: 760.0,
            }
        );
    }

    #[test]
    fn tiny_windows_saturate_at_zero() {
        let tiny = WebviewBounds {
            x: 0.0,
            y: 0.0,
            width: 120.0,
            height: 30.0,
        };
        let bounds = ShellLayout::default().right_of_sidebar(tiny);
        assert_eq!(bounds.width, 0.0);
        assert_eq!(bounds.height, 0.0);
    }

    #[test]
    fn memory_webview_records_calls_in_order() {
        let service = MemoryWebviewService::default();
        let service_obj: &dyn WebviewService = &service;

        block_on(service_obj.navigate_url("https://docs.rs")).expect("navigate");
        block_on(service_obj.show_external_webview()).expect("show");
        block_on(service_obj.hide_external_webview()).expect("hide");

        assert_eq!(
            service.calls(),
            vec![
                WebviewCall::Navigate("https://docs.rs".to_string()),
                WebviewCall::Show,
                WebviewCall::Hide,
            ]
        );
    }
}
