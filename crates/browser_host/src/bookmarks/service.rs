//! Bookmark backend service contracts and adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use super::model::{BookmarkNode, FolderData, NodeType, ROOT_BOOKMARK_INDEX};

/// Object-safe boxed future used by [`BookmarkService`] async methods.
pub type BookmarkFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Backend service owning the bookmark tree.
///
/// Mutations are acknowledged with `()`; the backend publishes the updated tree through the
/// bookmark-updated event rather than returning it.
pub trait BookmarkService {
    /// Returns the subtree rooted at `index` as nested JSON.
    fn nested_json<'a>(&'a self, index: usize) -> BookmarkFuture<'a, Result<String, String>>;

    /// Returns the bookmarks pinned to the toolbar.
    fn toolbar_bookmarks<'a>(&'a self) -> BookmarkFuture<'a, Result<Vec<BookmarkNode>, String>>;

    /// Returns the root followed by its direct child folders.
    fn root_and_children_folders<'a>(
        &'a self,
    ) -> BookmarkFuture<'a, Result<Vec<FolderData>, String>>;

    /// Appends a folder titled `title` under `parent_index`.
    fn add_folder<'a>(
        &'a self,
        parent_index: usize,
        title: &'a str,
    ) -> BookmarkFuture<'a, Result<(), String>>;

    /// Renames the node at `index`.
    fn update_bookmark_title<'a>(
        &'a self,
        index: usize,
        title: &'a str,
    ) -> BookmarkFuture<'a, Result<(), String>>;

    /// Removes the node at `index` together with its subtree.
    fn remove_bookmark<'a>(&'a self, index: usize) -> BookmarkFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op bookmark service for unsupported targets: an empty root and accepted mutations.
pub struct NoopBookmarkService;

impl BookmarkService for NoopBookmarkService {
    fn nested_json<'a>(&'a self, index: usize) -> BookmarkFuture<'a, Result<String, String>> {
        Box::pin(async move {
            serde_json::to_string(&BookmarkNode::root(index, "Bookmarks"))
                .map_err(|err| err.to_string())
        })
    }

    fn toolbar_bookmarks<'a>(&'a self) -> BookmarkFuture<'a, Result<Vec<BookmarkNode>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn root_and_children_folders<'a>(
        &'a self,
    ) -> BookmarkFuture<'a, Result<Vec<FolderData>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn add_folder<'a>(
        &'a self,
        _parent_index: usize,
        _title: &'a str,
    ) -> BookmarkFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn update_bookmark_title<'a>(
        &'a self,
        _index: usize,
        _title: &'a str,
    ) -> BookmarkFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn remove_bookmark<'a>(&'a self, _index: usize) -> BookmarkFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone)]
/// In-memory bookmark service backed by a shared tree.
pub struct MemoryBookmarkService {
    tree: Rc<RefCell<BookmarkNode>>,
    toolbar_folder: Option<usize>,
}

impl Default for MemoryBookmarkService {
    fn default() -> Self {
        Self::new(BookmarkNode::root(ROOT_BOOKMARK_INDEX, "Bookmarks"))
    }
}

impl MemoryBookmarkService {
    /// Creates a service over `tree` with no toolbar folder.
    pub fn new(tree: BookmarkNode) -> Self {
        Self {
            tree: Rc::new(RefCell::new(tree)),
            toolbar_folder: None,
        }
    }

    /// Marks the folder at `index` as the toolbar folder.
    pub fn with_toolbar_folder(mut self, index: usize) -> Self {
        self.toolbar_folder = Some(index);
        self
    }

    /// Returns a copy of the current tree.
    pub fn snapshot(&self) -> BookmarkNode {
        self.tree.borrow().clone()
    }

    fn node_not_found(index: usize) -> String {
        format!("node not found: {index}")
    }
}

impl BookmarkService for MemoryBookmarkService {
    fn nested_json<'a>(&'a self, index: usize) -> BookmarkFuture<'a, Result<String, String>> {
        Box::pin(async move {
            let tree = self.tree.borrow();
            let node = tree.find(index).ok_or_else(|| Self::node_not_found(index))?;
            serde_json::to_string(node).map_err(|err| err.to_string())
        })
    }

    fn toolbar_bookmarks<'a>(&'a self) -> BookmarkFuture<'a, Result<Vec<BookmarkNode>, String>> {
        Box::pin(async move {
            let folder_index = self
                .toolbar_folder
                .ok_or_else(|| "toolbar folder not found".to_string())?;
            let tree = self.tree.borrow();
            let folder = tree
                .find(folder_index)
                .ok_or_else(|| "toolbar folder not found".to_string())?;
            Ok(folder
                .children
                .iter()
                .filter(|child| child.node_type == NodeType::Bookmark)
                .cloned()
                .collect())
        })
    }

    fn root_and_children_folders<'a>(
        &'a self,
    ) -> BookmarkFuture<'a, Result<Vec<FolderData>, String>> {
        Box::pin(async move {
            let tree = self.tree.borrow();
            let mut folders = vec![tree.folder_data()];
            folders.extend(
                tree.children
                    .iter()
                    .filter(|child| child.node_type == NodeType::Folder)
                    .map(BookmarkNode::folder_data),
            );
            Ok(folders)
        })
    }

    fn add_folder<'a>(
        &'a self,
        parent_index: usize,
        title: &'a str,
    ) -> BookmarkFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut tree = self.tree.borrow_mut();
            let next_index = tree.max_index() + 1;
            let parent = tree
                .find_mut(parent_index)
                .ok_or_else(|| Self::node_not_found(parent_index))?;
            if !parent.node_type.is_container() {
                return Err(format!("cannot add a folder under bookmark {parent_index}"));
            }
            parent.children.push(BookmarkNode::folder(next_index, title));
            Ok(())
        })
    }

    fn update_bookmark_title<'a>(
        &'a self,
        index: usize,
        title: &'a str,
    ) -> BookmarkFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut tree = self.tree.borrow_mut();
            let node = tree
                .find_mut(index)
                .ok_or_else(|| Self::node_not_found(index))?;
            node.title = title.to_string();
            Ok(())
        })
    }

    fn remove_bookmark<'a>(&'a self, index: usize) -> BookmarkFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut tree = self.tree.borrow_mut();
            if tree.index == index {
                return Err("cannot remove root node".to_string());
            }
            if remove_child(&mut tree, index) {
                Ok(())
            } else {
                Err(Self::node_not_found(index))
            }
        })
    }
}

fn remove_child(node: &mut BookmarkNode, index: usize) -> bool {
    if let Some(position) = node.children.iter().position(|child| child.index == index) {
        node.children.remove(position);
        return true;
    }
    node.children
        .iter_mut()
        .any(|child| remove_child(child, index))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse_nested_json;

    fn sample_service() -> MemoryBookmarkService {
        let tree = BookmarkNode::root(1, "Bookmarks")
            .with_child(
                BookmarkNode::folder(2, "Toolbar")
                    .with_child(BookmarkNode::bookmark(4, "Rust", "https://www.rust-lang.org"))
                    .with_child(BookmarkNode::folder(5, "Nested")),
            )
            .with_child(BookmarkNode::folder(3, "Reading"))
            .with_child(BookmarkNode::bookmark(6, "Docs", "https://docs.rs"));
        MemoryBookmarkService::new(tree).with_toolbar_folder(2)
    }

    #[test]
    fn nested_json_serves_any_subtree() {
        let service = sample_service();
        let service_obj: &dyn BookmarkService = &service;

        let raw = block_on(service_obj.nested_json(2)).expect("toolbar subtree");
        let subtree = parse_nested_json(&raw).expect("parse subtree");
        assert_eq!(subtree.title, "Toolbar");
        assert_eq!(subtree.children.len(), 2);

        let err = block_on(service_obj.nested_json(42)).expect_err("unknown index");
        assert_eq!(err, "node not found: 42");
    }

    #[test]
    fn toolbar_bookmarks_skip_folders() {
        let service = sample_service();
        let pinned = block_on(service.toolbar_bookmarks()).expect("toolbar");
        assert_eq!(
            pinned.iter().map(|node| node.index).collect::<Vec<_>>(),
            vec![4]
        );

        let without_toolbar = MemoryBookmarkService::default();
        assert!(block_on(without_toolbar.toolbar_bookmarks()).is_err());
    }

    #[test]
    fn folder_list_is_root_then_direct_child_folders() {
        let service = sample_service();
        let folders = block_on(service.root_and_children_folders()).expect("folders");
        assert_eq!(
            folders,
            vec![
                FolderData {
                    index: 1,
                    title: "Bookmarks".to_string()
                },
                FolderData {
                    index: 2,
                    title: "Toolbar".to_string()
                },
                FolderData {
                    index: 3,
                    title: "Reading".to_string()
                },
            ]
        );
    }

    #[test]
    fn mutations_update_the_shared_tree() {
        let service = sample_service();

        block_on(service.add_folder(3, "Later")).expect("add folder");
        block_on(service.update_bookmark_title(6, "docs.rs")).expect("rename");
        block_on(service.remove_bookmark(5)).expect("remove nested");

        let tree = service.snapshot();
        let reading = tree.find(3).expect("reading folder");
        assert_eq!(reading.children[0].title, "Later");
        assert_eq!(reading.children[0].index, 7);
        assert_eq!(tree.find(6).map(|node| node.title.as_str()), Some("docs.rs"));
        assert_eq!(tree.find(5), None);
    }

    #[test]
    fn root_cannot_be_removed_and_bookmarks_cannot_hold_folders() {
        let service = sample_service();
        assert_eq!(
            block_on(service.remove_bookmark(1)),
            Err("cannot remove root node".to_string())
        );
        assert!(block_on(service.add_folder(6, "Nope")).is_err());
    }

    #[test]
    fn noop_service_returns_empty_root() {
        let service = NoopBookmarkService;
        let raw = block_on(service.nested_json(1)).expect("empty root");
        let root = parse_nested_json(&raw).expect("parse");
        assert_eq!(root.node_type, NodeType::Root);
        assert!(!root.has_children());
        assert_eq!(block_on(service.toolbar_bookmarks()).expect("toolbar"), Vec::new());
        block_on(service.remove_bookmark(2)).expect("remove accepted");
    }
}
