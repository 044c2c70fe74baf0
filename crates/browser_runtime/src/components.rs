//! Browser shell UI composition.

mod bookmark_tree;
mod context_menu;
mod dialogs;
mod folder_select;
mod toolbar;

use std::rc::Rc;

use browser_app_settings::SettingsPage;
use browser_host::{ShellLayout, Subscription};
use leptos::*;
use system_ui::{
    AppShell, Cluster, EmptyState, IconButton, IconName, LayoutGap, LayoutJustify, LayoutPadding,
    Stack, Text, TextRole,
};

use self::{
    bookmark_tree::BookmarkTree, dialogs::BookmarkDialogs, folder_select::RootChildrenSelect,
    toolbar::BrowserToolBar,
};
use crate::{
    host::subscribe_backend_events, model::Page, reducer::BrowserAction,
    runtime_context::use_browser_runtime,
};

pub use crate::runtime_context::{BrowserProvider, BrowserRuntimeContext};

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// Top-level browser shell: toolbar, sidebar or settings page, and dialogs.
///
/// Mounting boots the runtime and subscribes to backend events; unmounting releases the
/// subscriptions.
pub fn BrowserShell() -> impl IntoView {
    let runtime = use_browser_runtime();
    let state = runtime.state;
    let subscriptions = store_value(Vec::<Subscription>::new());

    runtime.dispatch_action(BrowserAction::Boot);

    let events = runtime
        .host
        .with_value(|host| Rc::clone(&host.services().events));
    spawn_local(async move {
        let acquired = subscribe_backend_events(events.as_ref(), move |action| {
            runtime.dispatch_action(action)
        })
        .await;
        // If the shell is already gone the guards drop here and release immediately.
        let _ = subscriptions.try_update_value(|held| held.extend(acquired));
    });
    on_cleanup(move || {
        let _ = subscriptions.try_update_value(|held| held.clear());
    });

    let page = create_memo(move |_| state.with(|state| state.page));
    let panel = create_memo(move |_| state.with(|state| state.panel));
    let settings = create_memo(move |_| state.with(|state| state.settings.clone()));
    let sidebar_style = format!("width:{}px;", ShellLayout::default().sidebar_width);

    view! {
        <AppShell layout_class="browser-shell">
            <BrowserToolBar />
            <div class="browser-body" data-panel=move || panel.get().token()>
                <aside class="browser-sidebar" style=sidebar_style>
                    {move || match page.get() {
                        Page::Settings => view! { <SettingsPage snapshot=settings /> }.into_view(),
                        Page::Home => view! { <BookmarksSidebar /> }.into_view(),
                    }}
                </aside>
            </div>
            <BookmarkDialogs />
        </AppShell>
    }
}

#[component]
fn BookmarksSidebar() -> impl IntoView {
    let runtime = use_browser_runtime();
    let state = runtime.state;
    let editing = create_memo(move |_| state.with(|state| state.editing));
    let bookmarks = create_memo(move |_| state.with(|state| state.bookmarks.clone()));

    view! {
        <Stack gap=LayoutGap::Sm padding=LayoutPadding::Sm ui_slot="sidebar">
            <Cluster justify=LayoutJustify::Between>
                <Text role=TextRole::Label>"Bookmarks"</Text>
                {move || {
                    let editing = editing.get();
                    let (icon, label) = if editing {
                        (IconName::PanelRight, "Show webview")
                    } else {
                        (IconName::Edit, "Hide webview and edit bookmarks")
                    };
                    view! {
                        <IconButton
                            icon
                            aria_label=label
                            title=label
                            pressed=editing
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(BrowserAction::ToggleEditing)
                            })
                        />
                    }
                }}
            </Cluster>
            <RootChildrenSelect />
            {move || match bookmarks.get() {
                Some(root) => view! { <BookmarkTree root editable=editing /> }.into_view(),
                None => view! { <EmptyState>"No bookmarks loaded"</EmptyState> }.into_view(),
            }}
        </Stack>
    }
}
