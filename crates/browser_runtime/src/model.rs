//! Shared state models for the bookmark browser runtime.

use browser_host::{BookmarkNode, FolderData, UserSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Visibility of the external content webview.
pub enum PanelState {
    /// The external webview is hidden.
    Hidden,
    /// The external webview is docked right of the sidebar.
    #[default]
    Right,
    /// The external webview covers everything below the toolbar.
    Full,
}

impl PanelState {
    /// Next state for the toolbar panel toggle: hidden → right → full → right.
    pub const fn cycled(self) -> Self {
        match self {
            Self::Hidden => Self::Right,
            Self::Right => Self::Full,
            Self::Full => Self::Right,
        }
    }

    /// Returns whether the external webview is on screen.
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// State after a navigation that must reveal the webview.
    pub const fn revealed(self) -> Self {
        match self {
            Self::Hidden => Self::Right,
            other => other,
        }
    }

    /// Stable token for `data-*` styling hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Right => "right",
            Self::Full => "full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Page rendered in the sidebar area.
pub enum Page {
    /// Bookmarks sidebar.
    #[default]
    Home,
    /// Settings page.
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Node a dialog operates on.
pub struct BookmarkTarget {
    /// Backend arena index.
    pub index: usize,
    /// Title at the time the dialog was opened.
    pub title: String,
}

impl BookmarkTarget {
    /// Captures the dialog target for `node`.
    pub fn of(node: &BookmarkNode) -> Self {
        Self {
            index: node.index,
            title: node.title.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Open flag plus the target a dialog acts on.
pub struct Dialog<T> {
    /// Whether the dialog is shown.
    pub open: bool,
    /// Target captured when the dialog was opened.
    pub target: Option<T>,
}

impl<T> Default for Dialog<T> {
    fn default() -> Self {
        Self {
            open: false,
            target: None,
        }
    }
}

impl<T> Dialog<T> {
    /// Opens the dialog for `target`.
    pub fn open_with(&mut self, target: T) {
        self.open = true;
        self.target = Some(target);
    }

    /// Closes the dialog and forgets its target.
    pub fn close(&mut self) {
        self.open = false;
        self.target = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Dialog identifiers.
pub enum DialogKind {
    /// New-folder dialog.
    AddFolder,
    /// Rename dialog.
    Edit,
    /// Delete confirmation.
    Delete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// All shell dialogs.
pub struct DialogState {
    /// Add-folder dialog; the target is the parent index.
    pub add_folder: Dialog<usize>,
    /// Rename dialog.
    pub edit: Dialog<BookmarkTarget>,
    /// Delete confirmation dialog.
    pub delete: Dialog<BookmarkTarget>,
}

impl DialogState {
    /// Closes the dialog identified by `kind`.
    pub fn close(&mut self, kind: DialogKind) {
        match kind {
            DialogKind::AddFolder => self.add_folder.close(),
            DialogKind::Edit => self.edit.close(),
            DialogKind::Delete => self.delete.close(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Runtime state shared by every shell component.
pub struct BrowserState {
    /// Latest bookmark tree served by the backend, if any.
    pub bookmarks: Option<BookmarkNode>,
    /// Pinned subset shown in the toolbar.
    pub toolbar_bookmarks: Vec<BookmarkNode>,
    /// Root and its direct child folders, for the folder selector.
    pub folders: Vec<FolderData>,
    /// Folder currently selected in the folder selector.
    pub selected_folder: Option<usize>,
    /// Latest settings snapshot.
    pub settings: Option<UserSettings>,
    /// External webview visibility.
    pub panel: PanelState,
    /// Sidebar shows the editable tree with node context menus.
    pub editing: bool,
    /// Page shown in the sidebar area.
    pub page: Page,
    /// URL currently loaded in the external webview.
    pub url: String,
    /// Title of the page loaded in the external webview.
    pub page_title: String,
    /// Dialog state.
    pub dialogs: DialogState,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn panel_cycle_never_returns_to_hidden() {
        let mut panel = PanelState::Hidden;
        let mut seen = Vec::new();
        for _ in 0..4 {
            panel = panel.cycled();
            seen.push(panel);
        }
        assert_eq!(
            seen,
            vec![
                PanelState::Right,
                PanelState::Full,
                PanelState::Right,
                PanelState::Full
            ]
        );
    }

    #[test]
    fn reveal_only_changes_hidden_panel() {
        assert_eq!(PanelState::Hidden.revealed(), PanelState::Right);
        assert_eq!(PanelState::Full.revealed(), PanelState::Full);
        assert!(!PanelState::Hidden.is_visible());
    }

    #[test]
    fn closing_dialog_clears_target() {
        let mut dialogs = DialogState::default();
        dialogs.add_folder.open_with(4);
        assert!(dialogs.add_folder.open);

        dialogs.close(DialogKind::AddFolder);

        assert_eq!(dialogs.add_folder, Dialog::default());
    }
}
