//! Bookmark tree wire models shared by the backend transport and the UI runtime.

use serde::{Deserialize, Serialize};

/// Index of the root bookmark node in the backend arena.
pub const ROOT_BOOKMARK_INDEX: usize = 1;

/// Origin of the local favicon server started by the native host.
pub const FAVICON_SERVER_ORIGIN: &str = "http://localhost:7853";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Classification of a bookmark-tree entry.
pub enum NodeType {
    /// The single tree root.
    Root,
    /// A folder that groups other nodes.
    Folder,
    /// A navigable bookmark.
    Bookmark,
}

impl NodeType {
    /// Returns whether nodes of this type group children (root or folder).
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Root | Self::Folder)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One node of the nested bookmark tree as serialized by the backend.
pub struct BookmarkNode {
    /// Backend arena index, stable for the node's lifetime.
    pub index: usize,
    /// Display title.
    pub title: String,
    /// Target URL; only bookmark nodes carry one.
    #[serde(default)]
    pub url: Option<String>,
    /// Host part of `url`, used to resolve a favicon.
    #[serde(default)]
    pub host: Option<String>,
    /// Node classification.
    pub node_type: NodeType,
    /// Ordered children in display order.
    #[serde(default)]
    pub children: Vec<BookmarkNode>,
}

impl BookmarkNode {
    /// Creates a childless root node.
    pub fn root(index: usize, title: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            url: None,
            host: None,
            node_type: NodeType::Root,
            children: Vec::new(),
        }
    }

    /// Creates a childless folder node.
    pub fn folder(index: usize, title: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Folder,
            ..Self::root(index, title)
        }
    }

    /// Creates a bookmark node, deriving `host` from `url`.
    pub fn bookmark(index: usize, title: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            index,
            title: title.into(),
            host: host_of(&url),
            url: Some(url),
            node_type: NodeType::Bookmark,
            children: Vec::new(),
        }
    }

    /// Appends `child` and returns `self` for tree literals.
    pub fn with_child(mut self, child: BookmarkNode) -> Self {
        self.children.push(child);
        self
    }

    /// Returns whether the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the URL a click on this node should navigate to.
    ///
    /// Only bookmark nodes are navigable, even if a folder carries a stray URL.
    pub fn navigable_url(&self) -> Option<&str> {
        match self.node_type {
            NodeType::Bookmark => self.url.as_deref(),
            NodeType::Root | NodeType::Folder => None,
        }
    }

    /// Finds a node by arena index in this subtree (pre-order).
    pub fn find(&self, index: usize) -> Option<&BookmarkNode> {
        if self.index == index {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(index))
    }

    /// Mutable variant of [`BookmarkNode::find`].
    pub fn find_mut(&mut self, index: usize) -> Option<&mut BookmarkNode> {
        if self.index == index {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(index))
    }

    /// Returns the largest arena index used in this subtree.
    pub fn max_index(&self) -> usize {
        self.children
            .iter()
            .map(BookmarkNode::max_index)
            .fold(self.index, usize::max)
    }

    /// Returns the folder-selector descriptor for this node.
    pub fn folder_data(&self) -> FolderData {
        FolderData {
            index: self.index,
            title: self.title.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Subset view of a bookmark node used by the root-folder selector.
pub struct FolderData {
    /// Backend arena index of the folder.
    pub index: usize,
    /// Folder title.
    pub title: String,
}

/// Parses the nested bookmark JSON emitted by the backend.
///
/// # Errors
///
/// Returns the JSON error message when `raw` is not a serialized [`BookmarkNode`].
pub fn parse_nested_json(raw: &str) -> Result<BookmarkNode, String> {
    serde_json::from_str(raw).map_err(|err| format!("invalid bookmark payload: {err}"))
}

/// Builds the favicon-server URL for a bookmark host.
///
/// The page URL travels as one percent-encoded query value.
pub fn favicon_url(host: Option<&str>) -> Option<String> {
    let host = host.map(str::trim).filter(|host| !host.is_empty())?;
    let page = format!("https://{host}");
    Some(format!(
        "{FAVICON_SERVER_ORIGIN}/favicon?url={}",
        urlencoding::encode(&page)
    ))
}

fn host_of(url: &str) -> Option<String> {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    (!host.is_empty()).then(|| host.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn nested_json_uses_backend_field_names() {
        let raw = r#"{
            "index": 1,
            "title": "Bookmarks",
            "url": null,
            "host": null,
            "node_type": "Root",
            "children": [
                {"index": 2, "title": "Rust", "url": "https://www.rust-lang.org/learn", "host": "www.rust-lang.org", "node_type": "Bookmark"}
            ]
        }"#;

        let tree = parse_nested_json(raw).expect("parse tree");

        assert_eq!(tree.node_type, NodeType::Root);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].children, Vec::new());
        assert_eq!(
            tree.children[0].navigable_url(),
            Some("https://www.rust-lang.org/learn")
        );
    }

    #[test]
    fn malformed_payload_reports_error() {
        let err = parse_nested_json("{\"index\": 1}").expect_err("missing fields");
        assert!(err.starts_with("invalid bookmark payload"));
    }

    #[test]
    fn folders_never_navigate_even_with_url() {
        let mut folder = BookmarkNode::folder(3, "Docs");
        folder.url = Some("https://example.com".to_string());
        assert_eq!(folder.navigable_url(), None);
    }

    #[test]
    fn bookmark_constructor_derives_host() {
        let node = BookmarkNode::bookmark(4, "Docs", "https://user@docs.rs:443/serde?x=1");
        assert_eq!(node.host.as_deref(), Some("docs.rs"));
        assert_eq!(
            favicon_url(node.host.as_deref()).as_deref(),
            Some("http://localhost:7853/favicon?url=https%3A%2F%2Fdocs.rs")
        );
        assert_eq!(favicon_url(Some("  ")), None);
    }

    #[test]
    fn favicon_query_encodes_reserved_host_characters() {
        assert_eq!(
            favicon_url(Some("a b&c=d#e")).as_deref(),
            Some("http://localhost:7853/favicon?url=https%3A%2F%2Fa%20b%26c%3Dd%23e")
        );
        assert_eq!(
            favicon_url(Some("bücher.example")).as_deref(),
            Some("http://localhost:7853/favicon?url=https%3A%2F%2Fb%C3%BCcher.example")
        );
    }

    #[test]
    fn find_and_max_index_walk_the_subtree() {
        let tree = BookmarkNode::root(1, "Bookmarks")
            .with_child(
                BookmarkNode::folder(2, "A").with_child(BookmarkNode::bookmark(7, "b1", "https://a")),
            )
            .with_child(BookmarkNode::bookmark(3, "b2", "https://b"));

        assert_eq!(tree.find(7).map(|node| node.title.as_str()), Some("b1"));
        assert_eq!(tree.find(9), None);
        assert_eq!(tree.max_index(), 7);
    }
}
