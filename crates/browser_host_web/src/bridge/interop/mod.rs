//! Shared Tauri transport interop for bridge domain modules.
//!
//! Calls are routed to a target-specific implementation so domain modules compile and behave
//! predictably on native test targets.

use browser_host::{BackendEvent, EventHandler, Subscription};
use serde::{de::DeserializeOwned, Serialize};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

#[derive(Debug, Clone, Copy, Default, Serialize)]
/// Argument object for commands that take no parameters.
pub struct NoArgs {}

/// Invokes backend `command` with camelCase `args` and decodes its JSON result.
pub async fn invoke<A, T>(command: &str, args: &A) -> Result<T, String>
where
    A: Serialize + ?Sized,
    T: DeserializeOwned,
{
    imp::invoke(command, args).await
}

/// Invokes backend `command`, discarding whatever it returns.
pub async fn invoke_unit<A>(command: &str, args: &A) -> Result<(), String>
where
    A: Serialize + ?Sized,
{
    imp::invoke_unit(command, args).await
}

/// Subscribes `handler` to backend `event`.
pub async fn listen(event: BackendEvent, handler: EventHandler) -> Result<Subscription, String> {
    imp::listen(event, handler).await
}
