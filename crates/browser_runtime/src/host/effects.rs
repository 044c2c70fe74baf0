//! Runtime-effect execution against the backend service bundle.

use browser_host::{
    parse_nested_json, BackendServices, BookmarkNode, ShellLayout, ROOT_BOOKMARK_INDEX,
};

use crate::{
    panel,
    reducer::{BrowserAction, RuntimeEffect},
};

/// Runs `effect` and returns the follow-up action carrying its result, if any.
///
/// Mutations return no action: the backend answers them with a bookmark-updated event.
///
/// # Errors
///
/// Returns the backend or decoding failure.
pub async fn execute_effect(
    services: &BackendServices,
    layout: ShellLayout,
    effect: RuntimeEffect,
) -> Result<Option<BrowserAction>, String> {
    match effect {
        RuntimeEffect::SyncBookmarks => {
            fetch_tree(services, ROOT_BOOKMARK_INDEX).await.map(Some)
        }
        RuntimeEffect::LoadBookmarks { folder_index } => {
            fetch_tree(services, folder_index).await.map(Some)
        }
        RuntimeEffect::SyncSettings => services
            .settings
            .user_settings()
            .await
            .map(|settings| Some(BrowserAction::SettingsLoaded(settings))),
        RuntimeEffect::LoadFolders => services
            .bookmarks
            .root_and_children_folders()
            .await
            .map(|folders| Some(BrowserAction::FoldersLoaded(folders))),
        RuntimeEffect::LoadToolbarBookmarks => services
            .bookmarks
            .toolbar_bookmarks()
            .await
            .map(|bookmarks| Some(BrowserAction::ToolbarBookmarksLoaded(bookmarks))),
        RuntimeEffect::NavigateUrl(url) => {
            services.webview.navigate_url(&url).await?;
            Ok(None)
        }
        RuntimeEffect::ApplyPanel(state) => {
            panel::apply_panel(services.webview.as_ref(), state, layout).await?;
            Ok(None)
        }
        RuntimeEffect::AddFolder {
            parent_index,
            title,
        } => {
            services.bookmarks.add_folder(parent_index, &title).await?;
            Ok(None)
        }
        RuntimeEffect::UpdateBookmarkTitle { index, title } => {
            services
                .bookmarks
                .update_bookmark_title(index, &title)
                .await?;
            Ok(None)
        }
        RuntimeEffect::RemoveBookmark { index } => {
            services.bookmarks.remove_bookmark(index).await?;
            Ok(None)
        }
    }
}

async fn fetch_tree(services: &BackendServices, index: usize) -> Result<BrowserAction, String> {
    let raw = services.bookmarks.nested_json(index).await?;
    let tree: BookmarkNode = parse_nested_json(&raw)?;
    Ok(BrowserAction::BookmarksLoaded(tree))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use browser_host::{
        HostStrategy, MemoryBookmarkService, MemoryEventBus, MemorySettingsService,
        MemoryWebviewService, UserSettings, WebviewCall,
    };
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::PanelState;

    struct Harness {
        bookmarks: MemoryBookmarkService,
        webview: MemoryWebviewService,
        services: BackendServices,
    }

    fn harness() -> Harness {
        let tree = BookmarkNode::root(1, "Bookmarks")
            .with_child(
                BookmarkNode::folder(2, "Toolbar")
                    .with_child(BookmarkNode::bookmark(3, "Docs", "https://docs.rs")),
            )
            .with_child(BookmarkNode::bookmark(4, "Crates", "https://crates.io"));
        let bookmarks = MemoryBookmarkService::new(tree).with_toolbar_folder(2);
        let webview = MemoryWebviewService::default();
        let services = BackendServices {
            bookmarks: Rc::new(bookmarks.clone()),
            settings: Rc::new(MemorySettingsService::new(UserSettings::default())),
            webview: Rc::new(webview.clone()),
            events: Rc::new(MemoryEventBus::default()),
            host_strategy: HostStrategy::DesktopStub,
        };
        Harness {
            bookmarks,
            webview,
            services,
        }
    }

    fn run(harness: &Harness, effect: RuntimeEffect) -> Option<BrowserAction> {
        block_on(execute_effect(
            &harness.services,
            ShellLayout::default(),
            effect,
        ))
        .expect("effect")
    }

    #[test]
    fn sync_bookmarks_loads_root_tree() {
        let harness = harness();

        let action = run(&harness, RuntimeEffect::SyncBookmarks);

        assert_eq!(
            action,
            Some(BrowserAction::BookmarksLoaded(harness.bookmarks.snapshot()))
        );
    }

    #[test]
    fn folder_fetch_loads_subtree() {
        let harness = harness();

        let Some(BrowserAction::BookmarksLoaded(tree)) =
            run(&harness, RuntimeEffect::LoadBookmarks { folder_index: 2 })
        else {
            panic!("expected a loaded tree");
        };

        assert_eq!(tree.title, "Toolbar");
        assert_eq!(tree.children.len(), 1);
    }

    #[test]
    fn queries_map_to_loaded_actions() {
        let harness = harness();

        assert_eq!(
            run(&harness, RuntimeEffect::SyncSettings),
            Some(BrowserAction::SettingsLoaded(UserSettings::default()))
        );
        let Some(BrowserAction::ToolbarBookmarksLoaded(pinned)) =
            run(&harness, RuntimeEffect::LoadToolbarBookmarks)
        else {
            panic!("expected toolbar bookmarks");
        };
        assert_eq!(pinned.len(), 1);
        let Some(BrowserAction::FoldersLoaded(folders)) = run(&harness, RuntimeEffect::LoadFolders)
        else {
            panic!("expected folders");
        };
        assert_eq!(
            folders.iter().map(|folder| folder.index).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn mutations_reach_the_backend_without_refetching() {
        let harness = harness();

        assert_eq!(
            run(
                &harness,
                RuntimeEffect::AddFolder {
                    parent_index: 1,
                    title: "Reading".to_string(),
                }
            ),
            None
        );
        run(
            &harness,
            RuntimeEffect::UpdateBookmarkTitle {
                index: 4,
                title: "Registry".to_string(),
            },
        );
        run(&harness, RuntimeEffect::RemoveBookmark { index: 3 });

        let tree = harness.bookmarks.snapshot();
        assert_eq!(tree.find(4).map(|node| node.title.as_str()), Some("Registry"));
        assert!(tree.find(3).is_none());
        assert_eq!(tree.children.last().map(|node| node.title.as_str()), Some("Reading"));
    }

    #[test]
    fn navigation_and_panel_reach_the_webview() {
        let harness = harness();

        run(&harness, RuntimeEffect::NavigateUrl("https://docs.rs".to_string()));
        run(&harness, RuntimeEffect::ApplyPanel(PanelState::Hidden));

        assert_eq!(
            harness.webview.calls(),
            vec![
                WebviewCall::Navigate("https://docs.rs".to_string()),
                WebviewCall::Hide,
            ]
        );
    }

    #[test]
    fn backend_failures_are_returned() {
        let harness = harness();
        let err = block_on(execute_effect(
            &harness.services,
            ShellLayout::default(),
            RuntimeEffect::RemoveBookmark { index: 1 },
        ))
        .expect_err("root removal");
        assert_eq!(err, "cannot remove root node");
    }
}
