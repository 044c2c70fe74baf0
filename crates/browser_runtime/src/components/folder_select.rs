use leptos::*;
use system_ui::SelectField;

use crate::{reducer::BrowserAction, runtime_context::use_browser_runtime};

#[component]
/// Selector over the root and its direct child folders.
pub(super) fn RootChildrenSelect() -> impl IntoView {
    let runtime = use_browser_runtime();
    let state = runtime.state;
    let folders = create_memo(move |_| state.with(|state| state.folders.clone()));
    let selected = create_memo(move |_| state.with(|state| state.selected_folder));

    view! {
        <Show when=move || !folders.with(Vec::is_empty) && selected.get().is_some()>
            <SelectField
                aria_label="Bookmark folder"
                ui_slot="folder-select"
                value=Signal::derive(move || {
                    selected.get().map(|index| index.to_string()).unwrap_or_default()
                })
                on_change=Callback::new(move |ev| {
                    if let Ok(index) = event_target_value(&ev).parse::<usize>() {
                        runtime.dispatch_action(BrowserAction::SelectFolder { index });
                    }
                })
            >
                <For each=move || folders.get() key=|folder| folder.index let:folder>
                    <option value=folder.index.to_string()>{folder.title}</option>
                </For>
            </SelectField>
        </Show>
    }
}
