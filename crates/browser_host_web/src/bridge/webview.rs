use browser_host::WebviewBounds;
use serde::Serialize;

use super::interop::{self, NoArgs};

#[derive(Serialize)]
struct UrlArgs<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct BoundsArgs {
    bounds: WebviewBounds,
}

pub(crate) async fn navigate_url(url: &str) -> Result<(), String> {
    interop::invoke_unit("navigate_webview_url", &UrlArgs { url }).await
}

pub(crate) async fn app_webview_bounds() -> Result<WebviewBounds, String> {
    interop::invoke("get_app_webview_bounds", &NoArgs {}).await
}

pub(crate) async fn set_external_webview_bounds(bounds: WebviewBounds) -> Result<(), String> {
    interop::invoke_unit("set_external_webview_bounds", &BoundsArgs { bounds }).await
}

pub(crate) async fn show_external_webview() -> Result<(), String> {
    interop::invoke_unit("show_external_webview", &NoArgs {}).await
}

pub(crate) async fn hide_external_webview() -> Result<(), String> {
    interop::invoke_unit("hide_external_webview", &NoArgs {}).await
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bounds_are_nested_under_bounds_key() {
        let args = BoundsArgs {
            bounds: WebviewBounds {
                x: 200.0,
                y: 40.0,
                width: 800.0,
                height: 560.0,
            },
        };
        assert_eq!(
            serde_json::to_value(args).expect("serialize"),
            serde_json::json!({
                "bounds": {"x": 200.0, "y": 40.0, "width": 800.0, "height": 560.0}
            })
        );
    }
}
