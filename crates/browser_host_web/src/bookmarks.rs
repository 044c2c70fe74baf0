//! Tauri command-backed bookmark service.

use browser_host::{BookmarkFuture, BookmarkNode, BookmarkService, FolderData};

#[derive(Debug, Clone, Copy, Default)]
/// Bookmark service backed by the native bookmark arena.
pub struct TauriBookmarkService;

impl BookmarkService for TauriBookmarkService {
    fn nested_json<'a>(&'a self, index: usize) -> BookmarkFuture<'a, Result<String, String>> {
        Box::pin(async move { crate::bridge::nested_json(index).await })
    }

    fn toolbar_bookmarks<'a>(&'a self) -> BookmarkFuture<'a, Result<Vec<BookmarkNode>, String>> {
        Box::pin(async move { crate::bridge::toolbar_bookmarks().await })
    }

    fn root_and_children_folders<'a>(
        &'a self,
    ) -> BookmarkFuture<'a, Result<Vec<FolderData>, String>> {
        Box::pin(async move { crate::bridge::root_and_children_folders().await })
    }

    fn add_folder<'a>(
        &'a self,
        parent_index: usize,
        title: &'a str,
    ) -> BookmarkFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::add_folder(parent_index, title).await })
    }

    fn update_bookmark_title<'a>(
        &'a self,
        index: usize,
        title: &'a str,
    ) -> BookmarkFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::update_bookmark_title(index, title).await })
    }

    fn remove_bookmark<'a>(&'a self, index: usize) -> BookmarkFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::remove_bookmark(index).await })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_tauri_bookmarks_adapter_matches_bridge_fallback_behavior() {
        let service = TauriBookmarkService;
        let service_obj: &dyn BookmarkService = &service;

        assert!(block_on(service_obj.nested_json(1)).is_err());
        assert!(block_on(service_obj.add_folder(1, "Reading")).is_err());
        assert!(block_on(service_obj.remove_bookmark(4)).is_err());
    }
}
