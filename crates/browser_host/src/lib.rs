//! Typed backend contracts and shared models for the bookmark browser UI.
//!
//! This crate is the API-first boundary between the Leptos UI and the native host. It exposes the
//! bookmark, settings, and webview wire models, object-safe service traits for every backend
//! command the UI issues, and the pushed-event subscription contract. Concrete Tauri transport
//! lives in `browser_host_web`; the in-memory and no-op implementations here back tests and the
//! stub host strategy.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bookmarks;
pub mod events;
pub mod host;
pub mod settings;
pub mod webview;

pub use bookmarks::model::{
    favicon_url, parse_nested_json, BookmarkNode, FolderData, NodeType, FAVICON_SERVER_ORIGIN,
    ROOT_BOOKMARK_INDEX,
};
pub use bookmarks::service::{
    BookmarkFuture, BookmarkService, MemoryBookmarkService, NoopBookmarkService,
};
pub use events::{
    BackendEvent, EventFuture, EventHandler, EventService, MemoryEventBus, NoopEventService,
    Subscription,
};
pub use host::{BackendServices, HostStrategy};
pub use settings::{
    MemorySettingsService, NoopSettingsService, SettingsFuture, SettingsService, UserSettings,
    DEFAULT_START_PAGE_URL,
};
pub use webview::{
    MemoryWebviewService, NoopWebviewService, ShellLayout, WebviewBounds, WebviewCall,
    WebviewFuture, WebviewService,
};
