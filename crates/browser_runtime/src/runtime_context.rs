//! Runtime provider and context wiring for the browser shell.
//!
//! This module owns the long-lived reducer container and the runtime effect queue. UI
//! composition stays in [`crate::components`].

use browser_host::BackendServices;
use leptos::*;

use crate::{
    effect_executor,
    host::BrowserHostContext,
    model::BrowserState,
    reducer::{reduce_browser, BrowserAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading browser state and dispatching [`BrowserAction`] values.
pub struct BrowserRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<BrowserHostContext>,
    /// Reactive browser state signal.
    pub state: RwSignal<BrowserState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<BrowserAction>,
}

impl BrowserRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: BrowserAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`BrowserRuntimeContext`] to descendant components.
pub fn BrowserProvider(
    /// Backend bundle assembled by the entry layer.
    backend_services: BackendServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(BrowserHostContext::new(backend_services));
    let state = create_rw_signal(BrowserState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: BrowserAction| {
        let mut browser = state.get_untracked();
        let previous = browser.clone();

        match reduce_browser(&mut browser, action) {
            Ok(new_effects) => {
                if browser != previous {
                    state.set(browser);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("browser reducer error: {err}"),
        }
    });

    let runtime = BrowserRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    logging::log!(
        "browser runtime using {} host",
        host.with_value(|host| host.host_strategy_name())
    );
    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`BrowserRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`BrowserProvider`].
pub fn use_browser_runtime() -> BrowserRuntimeContext {
    use_context::<BrowserRuntimeContext>().expect("BrowserRuntimeContext not provided")
}
