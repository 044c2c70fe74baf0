//! Reducer actions, side-effect intents, and transition logic for the browser runtime.

use browser_host::{parse_nested_json, BookmarkNode, FolderData, UserSettings};
use thiserror::Error;

use crate::model::{BookmarkTarget, BrowserState, DialogKind, Page, PanelState};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_browser`] to mutate [`BrowserState`].
pub enum BrowserAction {
    /// Shell mounted: synchronize bookmarks, settings and folders, and apply the panel.
    Boot,
    /// Replace the bookmark tree with a fetched one.
    BookmarksLoaded(BookmarkNode),
    /// Replace the bookmark tree with the raw JSON pushed by the backend.
    BookmarkPayloadReceived(String),
    /// Replace the toolbar's pinned subset.
    ToolbarBookmarksLoaded(Vec<BookmarkNode>),
    /// Replace the folder-selector entries.
    FoldersLoaded(Vec<FolderData>),
    /// Select a folder in the folder selector.
    SelectFolder {
        /// Folder index.
        index: usize,
    },
    /// Replace the settings snapshot.
    SettingsLoaded(UserSettings),
    /// The external webview started loading `url`.
    ExternalNavigated {
        /// New URL.
        url: String,
    },
    /// The external webview finished loading a page.
    ExternalPageLoaded {
        /// Page title.
        title: String,
    },
    /// Address-bar submit.
    NavigateTo {
        /// Raw address-bar text.
        url: String,
    },
    /// A bookmark row was clicked.
    BookmarkClicked {
        /// Bookmark URL.
        url: String,
    },
    /// A pinned toolbar favicon was clicked.
    PinnedClicked {
        /// Bookmark URL.
        url: String,
    },
    /// Toolbar panel toggle.
    CyclePanel,
    /// Toolbar settings toggle.
    ToggleSettings,
    /// Sidebar toggle between the read-only and editable tree.
    ToggleEditing,
    /// A node context menu opened.
    ContextMenuOpened,
    /// Open the add-folder dialog.
    OpenAddFolderDialog {
        /// Folder the new folder is appended to.
        parent_index: usize,
    },
    /// Open the rename dialog.
    OpenEditDialog(BookmarkTarget),
    /// Open the delete confirmation.
    OpenDeleteDialog(BookmarkTarget),
    /// Close a dialog without acting.
    CloseDialog(DialogKind),
    /// Confirm the add-folder dialog.
    ConfirmAddFolder {
        /// Title typed by the user.
        title: String,
    },
    /// Confirm the rename dialog.
    ConfirmEdit {
        /// New title.
        title: String,
    },
    /// Confirm the delete dialog.
    ConfirmDelete,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_browser`] and executed by the host.
pub enum RuntimeEffect {
    /// Fetch the tree rooted at the root bookmark.
    SyncBookmarks,
    /// Fetch the settings snapshot.
    SyncSettings,
    /// Fetch the root and its child folders.
    LoadFolders,
    /// Fetch the subtree of a folder.
    LoadBookmarks {
        /// Folder index.
        folder_index: usize,
    },
    /// Fetch the toolbar's pinned subset.
    LoadToolbarBookmarks,
    /// Navigate the external webview.
    NavigateUrl(String),
    /// Apply a panel state to the external webview.
    ApplyPanel(PanelState),
    /// Create a folder.
    AddFolder {
        /// Parent folder index.
        parent_index: usize,
        /// Folder title.
        title: String,
    },
    /// Rename a node.
    UpdateBookmarkTitle {
        /// Node index.
        index: usize,
        /// New title.
        title: String,
    },
    /// Delete a node and its subtree.
    RemoveBookmark {
        /// Node index.
        index: usize,
    },
}

impl RuntimeEffect {
    /// Short label used in failure logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SyncBookmarks => "sync bookmarks",
            Self::SyncSettings => "sync settings",
            Self::LoadFolders => "load folders",
            Self::LoadBookmarks { .. } => "load folder bookmarks",
            Self::LoadToolbarBookmarks => "load toolbar bookmarks",
            Self::NavigateUrl(_) => "navigate",
            Self::ApplyPanel(_) => "apply panel",
            Self::AddFolder { .. } => "add folder",
            Self::UpdateBookmarkTitle { .. } => "update bookmark title",
            Self::RemoveBookmark { .. } => "remove bookmark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejected actions. State is left untouched.
pub enum ReducerError {
    /// A dialog was confirmed while it had no target.
    #[error("{0:?} dialog confirmed without a target")]
    MissingDialogTarget(DialogKind),
    /// A folder title was empty after trimming.
    #[error("folder title must not be empty")]
    EmptyTitle,
    /// A pushed bookmark payload did not parse.
    #[error("{0}")]
    MalformedPayload(String),
}

/// Applies `action` to `state` and returns the side effects to run.
///
/// # Errors
///
/// Returns [`ReducerError`] when the action is rejected; callers discard any partial changes.
pub fn reduce_browser(
    state: &mut BrowserState,
    action: BrowserAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();

    match action {
        BrowserAction::Boot => {
            effects.extend([
                RuntimeEffect::SyncBookmarks,
                RuntimeEffect::SyncSettings,
                RuntimeEffect::LoadFolders,
                RuntimeEffect::ApplyPanel(state.panel),
            ]);
        }
        BrowserAction::BookmarksLoaded(tree) => {
            replace_bookmarks(state, tree, &mut effects);
        }
        BrowserAction::BookmarkPayloadReceived(raw) => {
            let tree = parse_nested_json(&raw).map_err(ReducerError::MalformedPayload)?;
            replace_bookmarks(state, tree, &mut effects);
        }
        BrowserAction::ToolbarBookmarksLoaded(bookmarks) => {
            state.toolbar_bookmarks = bookmarks;
        }
        BrowserAction::FoldersLoaded(folders) => {
            let first = folders.first().map(|folder| folder.index);
            state.folders = folders;
            if let (None, Some(index)) = (state.selected_folder, first) {
                state.selected_folder = Some(index);
                effects.push(RuntimeEffect::LoadBookmarks {
                    folder_index: index,
                });
            }
        }
        BrowserAction::SelectFolder { index } => {
            if index >= 1 {
                state.selected_folder = Some(index);
                effects.push(RuntimeEffect::LoadBookmarks {
                    folder_index: index,
                });
            }
        }
        BrowserAction::SettingsLoaded(settings) => {
            state.settings = Some(settings);
        }
        BrowserAction::ExternalNavigated { url } => {
            state.url = url;
        }
        BrowserAction::ExternalPageLoaded { title } => {
            state.page_title = title;
        }
        BrowserAction::NavigateTo { url } => {
            let url = url.trim();
            if !url.is_empty() {
                navigate_revealing(state, url.to_string(), &mut effects);
            }
        }
        BrowserAction::BookmarkClicked { url } => {
            navigate_revealing(state, url, &mut effects);
        }
        BrowserAction::PinnedClicked { url } => {
            state.page = Page::Home;
            navigate_revealing(state, url, &mut effects);
        }
        BrowserAction::CyclePanel => {
            let panel = state.panel.cycled();
            state.page = Page::Home;
            set_panel(state, panel, &mut effects);
        }
        BrowserAction::ToggleSettings => {
            let (page, panel) = match state.page {
                Page::Settings => (Page::Home, PanelState::Right),
                Page::Home => (Page::Settings, PanelState::Hidden),
            };
            state.page = page;
            set_panel(state, panel, &mut effects);
        }
        BrowserAction::ToggleEditing => {
            state.editing = !state.editing;
            let panel = if state.editing {
                PanelState::Hidden
            } else {
                state.panel.revealed()
            };
            if panel != state.panel {
                set_panel(state, panel, &mut effects);
            }
        }
        BrowserAction::ContextMenuOpened => {
            if state.panel.is_visible() {
                set_panel(state, PanelState::Hidden, &mut effects);
            }
        }
        BrowserAction::OpenAddFolderDialog { parent_index } => {
            state.dialogs.add_folder.open_with(parent_index);
        }
        BrowserAction::OpenEditDialog(target) => state.dialogs.edit.open_with(target),
        BrowserAction::OpenDeleteDialog(target) => state.dialogs.delete.open_with(target),
        BrowserAction::CloseDialog(kind) => state.dialogs.close(kind),
        BrowserAction::ConfirmAddFolder { title } => {
            let parent_index = state
                .dialogs
                .add_folder
                .target
                .ok_or(ReducerError::MissingDialogTarget(DialogKind::AddFolder))?;
            let title = title.trim();
            if title.is_empty() {
                return Err(ReducerError::EmptyTitle);
            }
            state.dialogs.add_folder.close();
            effects.push(RuntimeEffect::AddFolder {
                parent_index,
                title: title.to_string(),
            });
        }
        BrowserAction::ConfirmEdit { title } => {
            let target = state
                .dialogs
                .edit
                .target
                .take()
                .ok_or(ReducerError::MissingDialogTarget(DialogKind::Edit))?;
            state.dialogs.edit.close();
            effects.push(RuntimeEffect::UpdateBookmarkTitle {
                index: target.index,
                title,
            });
        }
        BrowserAction::ConfirmDelete => {
            let target = state
                .dialogs
                .delete
                .target
                .take()
                .ok_or(ReducerError::MissingDialogTarget(DialogKind::Delete))?;
            state.dialogs.delete.close();
            effects.push(RuntimeEffect::RemoveBookmark {
                index: target.index,
            });
        }
    }

    Ok(effects)
}

fn replace_bookmarks(
    state: &mut BrowserState,
    tree: BookmarkNode,
    effects: &mut Vec<RuntimeEffect>,
) {
    state.bookmarks = Some(tree);
    // The pinned subset is derived by the backend from the full tree.
    effects.push(RuntimeEffect::LoadToolbarBookmarks);
}

fn navigate_revealing(state: &mut BrowserState, url: String, effects: &mut Vec<RuntimeEffect>) {
    effects.push(RuntimeEffect::NavigateUrl(url));
    let revealed = state.panel.revealed();
    if revealed != state.panel {
        set_panel(state, revealed, effects);
    }
}

fn set_panel(state: &mut BrowserState, panel: PanelState, effects: &mut Vec<RuntimeEffect>) {
    state.panel = panel;
    effects.push(RuntimeEffect::ApplyPanel(panel));
}
