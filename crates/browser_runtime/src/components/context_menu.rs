use browser_host::BookmarkNode;
use leptos::*;
use system_ui::{ButtonVariant, MenuItem, MenuSeparator, MenuSurface};

use crate::{
    runtime_context::use_browser_runtime,
    tree::{context_menu_entries, ContextMenuEntry},
};

#[derive(Debug, Clone, PartialEq)]
/// Open node context menu anchored at viewport coordinates.
pub(super) struct NodeContextMenuState {
    pub(super) x: i32,
    pub(super) y: i32,
    pub(super) node: BookmarkNode,
}

#[component]
pub(super) fn NodeContextMenu(menu: RwSignal<Option<NodeContextMenuState>>) -> impl IntoView {
    let runtime = use_browser_runtime();

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if menu.get_untracked().is_some() {
            menu.set(None);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if menu.get_untracked().is_some() {
            ev.prevent_default();
            menu.set(None);
        }
    });
    on_cleanup(move || escape_listener.remove());

    move || {
        let Some(open) = menu.get() else {
            return ().into_view();
        };
        let style = format!("left:{}px;top:{}px;", open.x, open.y);
        let node = store_value(open.node);

        view! {
            <div
                class="node-context-menu"
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |ev| ev.stop_propagation()
            >
                <MenuSurface
                    aria_label=node.with_value(|node| format!("{} actions", node.title))
                    style
                >
                    {node
                        .with_value(context_menu_entries)
                        .into_iter()
                        .map(|entry| match entry {
                            ContextMenuEntry::Separator => view! { <MenuSeparator /> }.into_view(),
                            entry => {
                                let variant = if entry == ContextMenuEntry::Delete {
                                    ButtonVariant::Danger
                                } else {
                                    ButtonVariant::Quiet
                                };
                                view! {
                                    <MenuItem
                                        icon=entry.icon()
                                        variant
                                        disabled=!entry.enabled()
                                        on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                            super::stop_mouse_event(&ev);
                                            // Closing disposes `node`, so read it first.
                                            let action = node.with_value(|node| entry.action(node));
                                            menu.set(None);
                                            if let Some(action) = action {
                                                runtime.dispatch_action(action);
                                            }
                                        })
                                    >
                                        {entry.label()}
                                    </MenuItem>
                                }
                                .into_view()
                            }
                        })
                        .collect_view()}
                </MenuSurface>
            </div>
        }
        .into_view()
    }
}
