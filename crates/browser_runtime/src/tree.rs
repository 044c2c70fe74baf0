//! Pure row, icon, click, and context-menu rules for the bookmark tree.
//!
//! Components in [`crate::components`] keep one expand signal per rendered node and ask this
//! module what a row looks like and what a click or context menu should do.

use browser_host::{favicon_url, BookmarkNode, NodeType};
use system_ui::IconName;

use crate::{model::BookmarkTarget, reducer::BrowserAction};

/// Horizontal indent per nesting level, in CSS pixels.
pub const INDENT_STEP_PX: usize = 6;

/// Left padding for a row at `level`.
pub const fn indent_px(level: usize) -> usize {
    level * INDENT_STEP_PX
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Leading icon of a tree row.
pub enum RowIcon {
    /// Root or folder; `open` follows the node's expand state.
    Folder {
        /// Whether the open-folder variant is shown.
        open: bool,
    },
    /// Favicon served for the bookmark's host.
    Favicon(String),
    /// Bookmark without a usable host.
    Bookmark,
}

/// Leading icon for `node` given its expand state.
pub fn row_icon(node: &BookmarkNode, expanded: bool) -> RowIcon {
    if node.node_type.is_container() {
        return RowIcon::Folder { open: expanded };
    }
    favicon_url(node.host.as_deref()).map_or(RowIcon::Bookmark, RowIcon::Favicon)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of clicking a row body.
pub enum NodeClick {
    /// Flip the node's expand state.
    ToggleExpanded,
    /// Navigate the external webview.
    Navigate(String),
    /// Nothing to do.
    Nothing,
}

/// What a click on the body of `node` does.
pub fn node_click(node: &BookmarkNode) -> NodeClick {
    if node.node_type.is_container() {
        return if node.has_children() {
            NodeClick::ToggleExpanded
        } else {
            NodeClick::Nothing
        };
    }
    node.navigable_url()
        .map_or(NodeClick::Nothing, |url| NodeClick::Navigate(url.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Entries of a node's context menu, in display order.
pub enum ContextMenuEntry {
    /// Open the add-folder dialog with the node as parent.
    AddFolder,
    /// Not implemented; rendered disabled.
    AddBookmark,
    /// Open the rename dialog.
    Edit,
    /// Not implemented; rendered disabled, bookmarks only.
    PinToToolbar,
    /// Open the delete confirmation; never offered for the root.
    Delete,
    /// Visual separator.
    Separator,
}

impl ContextMenuEntry {
    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddFolder => "Add Folder",
            Self::AddBookmark => "Add Bookmark",
            Self::Edit => "Edit",
            Self::PinToToolbar => "Pin to Toolbar",
            Self::Delete => "Delete",
            Self::Separator => "",
        }
    }

    /// Leading icon; separators have none.
    pub const fn icon(self) -> Option<IconName> {
        match self {
            Self::AddFolder => Some(IconName::FolderAdd),
            Self::AddBookmark | Self::PinToToolbar => Some(IconName::Bookmark),
            Self::Edit => Some(IconName::Edit),
            Self::Delete => Some(IconName::Delete),
            Self::Separator => None,
        }
    }

    /// Whether the entry can be activated.
    pub const fn enabled(self) -> bool {
        matches!(self, Self::AddFolder | Self::Edit | Self::Delete)
    }

    /// Action dispatched when the entry is activated on `node`.
    pub fn action(self, node: &BookmarkNode) -> Option<BrowserAction> {
        match self {
            Self::AddFolder => Some(BrowserAction::OpenAddFolderDialog {
                parent_index: node.index,
            }),
            Self::Edit => Some(BrowserAction::OpenEditDialog(BookmarkTarget::of(node))),
            Self::Delete => Some(BrowserAction::OpenDeleteDialog(BookmarkTarget::of(node))),
            Self::AddBookmark | Self::PinToToolbar | Self::Separator => None,
        }
    }
}

/// Context menu for `node`.
pub fn context_menu_entries(node: &BookmarkNode) -> Vec<ContextMenuEntry> {
    let mut entries = vec![
        ContextMenuEntry::AddFolder,
        ContextMenuEntry::AddBookmark,
        ContextMenuEntry::Separator,
        ContextMenuEntry::Edit,
    ];
    if node.node_type == NodeType::Bookmark {
        entries.push(ContextMenuEntry::PinToToolbar);
    }
    if node.node_type != NodeType::Root {
        entries.extend([ContextMenuEntry::Separator, ContextMenuEntry::Delete]);
    }
    entries
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One visible row of a rendered tree.
pub struct TreeRow {
    /// Node index.
    pub index: usize,
    /// Node title.
    pub title: String,
    /// Nesting level.
    pub level: usize,
    /// Leading icon.
    pub icon: RowIcon,
    /// Whether a disclosure arrow is shown.
    pub has_children: bool,
}

/// Flattens the rows visible for `node` rendered at `level`, in display order.
///
/// `is_expanded` reports the expand state of each node by index.
pub fn visible_rows(
    node: &BookmarkNode,
    level: usize,
    is_expanded: &impl Fn(usize) -> bool,
) -> Vec<TreeRow> {
    let expanded = is_expanded(node.index);
    let mut rows = vec![TreeRow {
        index: node.index,
        title: node.title.clone(),
        level,
        icon: row_icon(node, expanded),
        has_children: node.has_children(),
    }];
    if expanded {
        for child in &node.children {
            rows.extend(visible_rows(child, level + 1, is_expanded));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    fn scenario() -> BookmarkNode {
        BookmarkNode::root(1, "Root")
            .with_child(
                BookmarkNode::folder(2, "A")
                    .with_child(BookmarkNode::bookmark(3, "b1", "https://one.example/u1")),
            )
            .with_child(BookmarkNode::bookmark(4, "b2", "https://two.example/u2"))
    }

    fn titles_and_levels(rows: &[TreeRow]) -> Vec<(&str, usize)> {
        rows.iter()
            .map(|row| (row.title.as_str(), row.level))
            .collect()
    }

    #[test]
    fn scenario_rows_follow_expand_state() {
        let tree = scenario();
        let collapsed: HashSet<usize> = HashSet::from([2]);

        let rows = visible_rows(&tree, 0, &|index| !collapsed.contains(&index));
        assert_eq!(titles_and_levels(&rows), vec![("Root", 0), ("A", 1), ("b2", 1)]);

        let rows = visible_rows(&tree, 0, &|_| true);
        assert_eq!(
            titles_and_levels(&rows),
            vec![("Root", 0), ("A", 1), ("b1", 2), ("b2", 1)]
        );
        assert_eq!(
            node_click(&tree.children[1]),
            NodeClick::Navigate("https://two.example/u2".to_string())
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let tree = scenario();
        let first = visible_rows(&tree, 0, &|_| true);
        let second = visible_rows(&tree, 0, &|_| true);
        assert_eq!(first, second);
    }

    #[test]
    fn collapsing_one_folder_leaves_siblings_and_ancestors_alone() {
        let tree = BookmarkNode::root(1, "Root")
            .with_child(
                BookmarkNode::folder(2, "A")
                    .with_child(BookmarkNode::bookmark(3, "a1", "https://a.example")),
            )
            .with_child(
                BookmarkNode::folder(4, "B")
                    .with_child(BookmarkNode::bookmark(5, "b1", "https://b.example")),
            );
        let collapsed: HashSet<usize> = HashSet::from([2]);

        let rows = visible_rows(&tree, 0, &|index| !collapsed.contains(&index));

        assert_eq!(
            rows.iter().map(|row| row.index).collect::<Vec<_>>(),
            vec![1, 2, 4, 5]
        );
        assert_eq!(rows[1].icon, RowIcon::Folder { open: false });
        assert_eq!(rows[2].icon, RowIcon::Folder { open: true });
    }

    #[test]
    fn containers_toggle_and_never_navigate() {
        let tree = scenario();
        assert_eq!(node_click(&tree), NodeClick::ToggleExpanded);
        assert_eq!(node_click(&tree.children[0]), NodeClick::ToggleExpanded);
        assert_eq!(node_click(&BookmarkNode::folder(9, "Empty")), NodeClick::Nothing);
    }

    #[test]
    fn bookmark_rows_use_host_favicon() {
        let node = BookmarkNode::bookmark(3, "Docs", "https://docs.rs/serde");
        assert_eq!(
            row_icon(&node, true),
            RowIcon::Favicon(
                "http://localhost:7853/favicon?url=https%3A%2F%2Fdocs.rs".to_string()
            )
        );
        assert_eq!(indent_px(3), 18);
    }

    #[test]
    fn only_root_lacks_delete() {
        let tree = scenario();
        assert!(!context_menu_entries(&tree).contains(&ContextMenuEntry::Delete));
        assert!(context_menu_entries(&tree.children[0]).contains(&ContextMenuEntry::Delete));
        assert!(context_menu_entries(&tree.children[1]).contains(&ContextMenuEntry::Delete));
    }

    #[test]
    fn pin_entry_is_bookmark_only_and_disabled() {
        let tree = scenario();
        assert!(!context_menu_entries(&tree.children[0]).contains(&ContextMenuEntry::PinToToolbar));
        assert_eq!(
            context_menu_entries(&tree.children[1]),
            vec![
                ContextMenuEntry::AddFolder,
                ContextMenuEntry::AddBookmark,
                ContextMenuEntry::Separator,
                ContextMenuEntry::Edit,
                ContextMenuEntry::PinToToolbar,
                ContextMenuEntry::Separator,
                ContextMenuEntry::Delete,
            ]
        );
        assert!(!ContextMenuEntry::PinToToolbar.enabled());
        assert!(!ContextMenuEntry::AddBookmark.enabled());
    }

    #[test]
    fn menu_entries_open_dialogs_for_their_node() {
        let node = BookmarkNode::folder(2, "A");
        assert_eq!(
            ContextMenuEntry::AddFolder.action(&node),
            Some(BrowserAction::OpenAddFolderDialog { parent_index: 2 })
        );
        assert_eq!(
            ContextMenuEntry::Delete.action(&node),
            Some(BrowserAction::OpenDeleteDialog(BookmarkTarget {
                index: 2,
                title: "A".to_string(),
            }))
        );
        assert_eq!(ContextMenuEntry::PinToToolbar.action(&node), None);
    }

    #[test]
    fn separators_carry_no_icon() {
        assert_eq!(ContextMenuEntry::Separator.icon(), None);
        assert_eq!(ContextMenuEntry::Delete.icon(), Some(IconName::Delete));
        assert_eq!(ContextMenuEntry::AddFolder.icon(), Some(IconName::FolderAdd));
    }
}
