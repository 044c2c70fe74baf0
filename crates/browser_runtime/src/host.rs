//! Host-side runtime helpers for executing reducer effects against the backend services.
//!
//! The reducer stays pure; everything that talks to the native backend goes through
//! [`BrowserHostContext`], which wraps the injected [`BackendServices`] bundle.

mod effects;
mod events;

use browser_host::{BackendServices, ShellLayout};
use leptos::{logging, spawn_local};

use crate::{reducer::RuntimeEffect, runtime_context::BrowserRuntimeContext};

pub use effects::execute_effect;
pub use events::{action_for_event, subscribe_backend_events};

#[derive(Clone)]
/// Backend service bundle plus the fixed shell chrome geometry.
pub struct BrowserHostContext {
    services: BackendServices,
    layout: ShellLayout,
}

impl Default for BrowserHostContext {
    fn default() -> Self {
        Self::new(BackendServices::noop())
    }
}

impl BrowserHostContext {
    /// Creates a host context over `services` with the default [`ShellLayout`].
    pub fn new(services: BackendServices) -> Self {
        Self {
            services,
            layout: ShellLayout::default(),
        }
    }

    /// Returns the injected backend services.
    pub fn services(&self) -> &BackendServices {
        &self.services
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    ///
    /// Effects run as detached local futures; results come back as reducer actions and
    /// failures are logged.
    pub fn run_runtime_effect(&self, runtime: BrowserRuntimeContext, effect: RuntimeEffect) {
        let services = self.services.clone();
        let layout = self.layout;
        spawn_local(async move {
            let label = effect.label();
            match execute_effect(&services, layout, effect).await {
                Ok(Some(action)) => runtime.dispatch_action(action),
                Ok(None) => {}
                Err(err) => logging::warn!("{label} failed: {err}"),
            }
        });
    }
}
