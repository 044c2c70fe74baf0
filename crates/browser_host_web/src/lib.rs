//! Webview (`wasm32`) implementations of [`browser_host`] service contracts.
//!
//! This crate is the concrete transport layer between the browser UI and the native backend:
//! bookmark commands, settings snapshots, external webview control, and push events.
//!
//! Bindings are split by domain under `bridge/`:
//! - `bridge::bookmarks`
//! - `bridge::settings`
//! - `bridge::webview`
//! - `bridge::interop` (shared wasm/non-wasm transport glue)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and backend bundle factories for runtime wiring.
pub mod adapters;
pub mod bookmarks;
mod bridge;
pub mod events;
pub mod settings;
pub mod webview;

pub use adapters::{
    build_backend_services, build_backend_services_for, host_strategy_name,
    selected_host_strategy,
};
pub use bookmarks::TauriBookmarkService;
pub use events::TauriEventService;
pub use settings::TauriSettingsService;
pub use webview::TauriWebviewService;
