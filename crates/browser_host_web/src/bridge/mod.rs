//! Tauri command bindings for `browser_host_web` service adapters.
//!
//! Bindings are organized by backend domain (`bookmarks`, `settings`, `webview`) over a shared
//! `interop` transport that also carries event subscriptions.

mod bookmarks;
mod interop;
mod settings;
mod webview;

pub(crate) use bookmarks::{
    add_folder, nested_json, remove_bookmark, root_and_children_folders, toolbar_bookmarks,
    update_bookmark_title,
};
pub(crate) use interop::listen;
pub(crate) use settings::user_settings;
pub(crate) use webview::{
    app_webview_bounds, hide_external_webview, navigate_url, set_external_webview_bounds,
    show_external_webview,
};

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use browser_host::{BackendEvent, WebviewBounds};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn command_public_api_non_wasm_parity() {
        let expected = "Tauri commands are only available when compiled for wasm32".to_string();

        assert_eq!(block_on(nested_json(1)).expect_err("nested json"), expected);
        assert_eq!(
            block_on(toolbar_bookmarks()).expect_err("toolbar"),
            expected
        );
        assert_eq!(
            block_on(root_and_children_folders()).expect_err("folders"),
            expected
        );
        assert_eq!(
            block_on(add_folder(1, "New")).expect_err("add folder"),
            expected
        );
        assert_eq!(
            block_on(update_bookmark_title(2, "Renamed")).expect_err("rename"),
            expected
        );
        assert_eq!(block_on(remove_bookmark(2)).expect_err("remove"), expected);
        assert_eq!(block_on(user_settings()).expect_err("settings"), expected);
        assert_eq!(
            block_on(navigate_url("https://docs.rs")).expect_err("navigate"),
            expected
        );
        assert_eq!(
            block_on(app_webview_bounds()).expect_err("bounds"),
            expected
        );
        assert_eq!(
            block_on(set_external_webview_bounds(WebviewBounds {
                x: 0.0,
                y: 40.0,
                width: 100.0,
                height: 100.0,
            }))
            .expect_err("set bounds"),
            expected
        );
        assert_eq!(block_on(show_external_webview()).expect_err("show"), expected);
        assert_eq!(block_on(hide_external_webview()).expect_err("hide"), expected);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn listen_non_wasm_returns_detached_subscription() {
        let handler: browser_host::EventHandler = Rc::new(|_payload: String| {});
        let subscription =
            block_on(listen(BackendEvent::BookmarkUpdated, handler)).expect("listen");
        assert_eq!(subscription.event(), BackendEvent::BookmarkUpdated);
    }
}
