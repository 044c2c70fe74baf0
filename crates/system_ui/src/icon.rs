//! Centralized icon set rendered as inline SVG.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icons available to the shell and apps.
pub enum IconName {
    /// Closed folder.
    Folder,
    /// Open folder.
    FolderOpen,
    /// Folder with a plus badge.
    FolderAdd,
    /// Generic bookmark fallback when no favicon is available.
    Bookmark,
    /// Collapsed disclosure chevron.
    ChevronRight,
    /// Expanded disclosure chevron.
    ChevronDown,
    /// Home page.
    Home,
    /// Settings gear.
    Settings,
    /// Panel docked beside the sidebar.
    PanelRight,
    /// Panel covering the content area.
    PanelFull,
    /// Hidden panel.
    PanelHidden,
    /// Rename/edit pencil.
    Edit,
    /// Delete/trash.
    Delete,
    /// Close cross.
    Close,
}

impl IconName {
    /// Stable token for `data-ui-icon` styling hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::FolderOpen => "folder-open",
            Self::FolderAdd => "folder-add",
            Self::Bookmark => "bookmark",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::Home => "home",
            Self::Settings => "settings",
            Self::PanelRight => "panel-right",
            Self::PanelFull => "panel-full",
            Self::PanelHidden => "panel-hidden",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Close => "close",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Folder => "M3 6.5A1.5 1.5 0 0 1 4.5 5H9l2 2h8.5A1.5 1.5 0 0 1 21 8.5v9a1.5 1.5 0 0 1-1.5 1.5h-15A1.5 1.5 0 0 1 3 17.5z",
            Self::FolderOpen => "M3 6.5A1.5 1.5 0 0 1 4.5 5H9l2 2h7.5A1.5 1.5 0 0 1 20 8.5V10H6.6a1.5 1.5 0 0 0-1.4 1L3 17.5zM5.2 11h16.3l-2.2 7a1.5 1.5 0 0 1-1.4 1H3.4z",
            Self::FolderAdd => "M3 6.5A1.5 1.5 0 0 1 4.5 5H9l2 2h8.5A1.5 1.5 0 0 1 21 8.5v9a1.5 1.5 0 0 1-1.5 1.5h-15A1.5 1.5 0 0 1 3 17.5zM11 10v2.5H8.5v1.5H11v2.5h1.5V14H15v-1.5h-2.5V10z",
            Self::Bookmark => "M6 3.5A1.5 1.5 0 0 1 7.5 2h9A1.5 1.5 0 0 1 18 3.5V21l-6-4-6 4z",
            Self::ChevronRight => "M9 5.5 15.5 12 9 18.5 7.6 17.1l5.1-5.1-5.1-5.1z",
            Self::ChevronDown => "M5.5 9 12 15.5 18.5 9l-1.4-1.4-5.1 5.1-5.1-5.1z",
            Self::Home => "M12 3 2.5 11H5v9h5.5v-6h3v6H19v-9h2.5z",
            Self::Settings => "M10.3 2h3.4l.5 2.6 1.8.8 2.2-1.5 2.4 2.4-1.5 2.2.8 1.8 2.6.5v3.4l-2.6.5-.8 1.8 1.5 2.2-2.4 2.4-2.2-1.5-1.8.8-.5 2.6h-3.4l-.5-2.6-1.8-.8-2.2 1.5-2.4-2.4 1.5-2.2-.8-1.8L2 13.7v-3.4l2.6-.5.8-1.8-1.5-2.2 2.4-2.4 2.2 1.5 1.8-.8zM12 8.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7z",
            Self::PanelRight => "M3 4h18v16H3zm2 2v12h4V6zm6 0v12h8V6z",
            Self::PanelFull => "M3 4h18v16H3zm2 2v12h14V6z",
            Self::PanelHidden => "M3 4h18v16H3zm2 2v12h14V6zm2.3 1.9 9.8 9.8-1.4 1.4-9.8-9.8z",
            Self::Edit => "M4 16.5V20h3.5L18 9.5 14.5 6zM15.9 4.6l3.5 3.5 1.3-1.3a1 1 0 0 0 0-1.4l-2.1-2.1a1 1 0 0 0-1.4 0z",
            Self::Delete => "M9 3h6l1 1h4v2H4V4h4zM6 8h12l-1 12.5a1.5 1.5 0 0 1-1.5 1.5h-7A1.5 1.5 0 0 1 7 20.5z",
            Self::Close => "M6.4 5 12 10.6 17.6 5 19 6.4 13.4 12 19 17.6 17.6 19 12 13.4 6.4 19 5 17.6 10.6 12 5 6.4z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 14px icon for dense rows.
    Sm,
    /// 18px icon.
    #[default]
    Md,
    /// 24px icon.
    Lg,
}

impl IconSize {
    /// Rendered edge length in CSS pixels.
    pub const fn px(self) -> u8 {
        match self {
            Self::Sm => 14,
            Self::Md => 18,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Inline SVG icon.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-icon"
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
            data-ui-icon=icon.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_sizes_are_ordered() {
        assert!(IconSize::Sm.px() < IconSize::Md.px());
        assert!(IconSize::Md.px() < IconSize::Lg.px());
        assert_eq!(IconName::FolderOpen.token(), "folder-open");
    }
}
