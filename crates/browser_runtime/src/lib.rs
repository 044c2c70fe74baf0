//! Bookmark browser runtime: shared state, reducer, effect execution, and the Leptos shell.
//!
//! The entry layer builds a [`browser_host::BackendServices`] bundle, wraps the UI in
//! [`BrowserProvider`], and mounts [`BrowserShell`].

pub mod components;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod panel;
pub mod reducer;
pub mod runtime_context;
pub mod tree;

pub use components::{BrowserProvider, BrowserRuntimeContext, BrowserShell};
pub use model::*;
pub use reducer::{reduce_browser, BrowserAction, ReducerError, RuntimeEffect};
pub use runtime_context::use_browser_runtime;
