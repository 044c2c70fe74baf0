//! Applies [`PanelState`] to the external webview.

use browser_host::{ShellLayout, WebviewBounds, WebviewService};

use crate::model::PanelState;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Native webview command realizing a panel state.
pub enum PanelCommand {
    /// Hide the external webview.
    Hide,
    /// Move the external webview to the bounds, then show it.
    Show(WebviewBounds),
}

/// Command for `panel` inside an app webview of size `app`.
pub fn panel_command(panel: PanelState, layout: ShellLayout, app: WebviewBounds) -> PanelCommand {
    match panel {
        PanelState::Hidden => PanelCommand::Hide,
        PanelState::Right => PanelCommand::Show(layout.right_of_sidebar(app)),
        PanelState::Full => PanelCommand::Show(layout.below_toolbar(app)),
    }
}

/// Hides, or resizes and shows, the external webview for `panel`.
///
/// # Errors
///
/// Returns the first backend failure.
pub async fn apply_panel(
    webview: &dyn WebviewService,
    panel: PanelState,
    layout: ShellLayout,
) -> Result<(), String> {
    if panel == PanelState::Hidden {
        return webview.hide_external_webview().await;
    }

    let app = webview.app_webview_bounds().await?;
    match panel_command(panel, layout, app) {
        PanelCommand::Hide => webview.hide_external_webview().await,
        PanelCommand::Show(bounds) => {
            webview.set_external_webview_bounds(bounds).await?;
            webview.show_external_webview().await
        }
    }
}

#[cfg(test)]
mod tests {
    use browser_host::{MemoryWebviewService, NoopWebviewService, WebviewCall};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn app() -> WebviewBounds {
        WebviewBounds {
            x: 0.0,
            y: 0.0,
            width: 1280.0,
            height: 800.0,
        }
    }

    #[test]
    fn right_panel_is_resized_then_shown() {
        let webview = MemoryWebviewService::new(app());

        block_on(apply_panel(&webview, PanelState::Right, ShellLayout::default()))
            .expect("apply");

        assert_eq!(
            webview.calls(),
            vec![
                WebviewCall::SetBounds(WebviewBounds {
                    x: 200.0,
                    y: 40.0,
                    width: 1080.0,
                    height: 760.0,
                }),
                WebviewCall::Show,
            ]
        );
    }

    #[test]
    fn full_panel_spans_the_width() {
        assert_eq!(
            panel_command(PanelState::Full, ShellLayout::default(), app()),
            PanelCommand::Show(WebviewBounds {
                x: 0.0,
                y: 40.0,
                width: 1280.0,
                height: 760.0,
            })
        );
    }

    #[test]
    fn hidden_panel_skips_bounds_query() {
        let webview = MemoryWebviewService::default();

        block_on(apply_panel(&webview, PanelState::Hidden, ShellLayout::default()))
            .expect("apply");

        assert_eq!(webview.calls(), vec![WebviewCall::Hide]);
    }

    #[test]
    fn missing_app_bounds_fails_before_showing() {
        let err = block_on(apply_panel(
            &NoopWebviewService,
            PanelState::Full,
            ShellLayout::default(),
        ))
        .expect_err("no bounds");
        assert_eq!(err, "app webview bounds unavailable");
    }
}
