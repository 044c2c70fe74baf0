use browser_host::{favicon_url, BookmarkNode};
use leptos::*;
use system_ui::{
    Button, ButtonSize, ButtonVariant, FieldVariant, Icon, IconButton, IconName, IconSize,
    LayoutGap, TextField, ToolBar,
};

use crate::{
    model::{Page, PanelState},
    reducer::BrowserAction,
    runtime_context::use_browser_runtime,
};

fn panel_toggle_icon(panel: PanelState) -> (IconName, &'static str) {
    match panel {
        PanelState::Hidden => (IconName::PanelHidden, "Show webview beside bookmarks"),
        PanelState::Right => (IconName::PanelRight, "Expand webview"),
        PanelState::Full => (IconName::PanelFull, "Dock webview beside bookmarks"),
    }
}

#[component]
/// Panel toggle, pinned favicons, address bar, and settings toggle.
pub(super) fn BrowserToolBar() -> impl IntoView {
    let runtime = use_browser_runtime();
    let state = runtime.state;
    let panel = create_memo(move |_| state.with(|state| state.panel));
    let on_settings = create_memo(move |_| state.with(|state| state.page == Page::Settings));
    let pinned = create_memo(move |_| state.with(|state| state.toolbar_bookmarks.clone()));

    view! {
        <ToolBar layout_class="browser-toolbar" gap=LayoutGap::Sm aria_label="Browser toolbar">
            {move || {
                let (icon, label) = panel_toggle_icon(panel.get());
                view! {
                    <IconButton
                        icon
                        aria_label=label
                        title=label
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(BrowserAction::CyclePanel)
                        })
                    />
                }
            }}
            <div class="toolbar-pinned" role="list" aria-label="Pinned bookmarks">
                <For each=move || pinned.get() key=|bookmark| bookmark.index let:bookmark>
                    <PinnedBookmarkButton bookmark />
                </For>
            </div>
            <AddressBar />
            <IconButton
                icon=IconName::Settings
                aria_label="Settings"
                title="Settings"
                pressed=on_settings
                on_click=Callback::new(move |_| {
                    runtime.dispatch_action(BrowserAction::ToggleSettings)
                })
            />
        </ToolBar>
    }
}

#[component]
fn PinnedBookmarkButton(bookmark: BookmarkNode) -> impl IntoView {
    let runtime = use_browser_runtime();
    let url = bookmark.navigable_url().map(str::to_string);
    let favicon = favicon_url(bookmark.host.as_deref());

    view! {
        <Button
            variant=ButtonVariant::Quiet
            size=ButtonSize::Sm
            role="listitem"
            aria_label=bookmark.title.clone()
            title=bookmark.title
            ui_slot="pinned"
            on_click=Callback::new(move |_| {
                if let Some(url) = url.clone() {
                    runtime.dispatch_action(BrowserAction::PinnedClicked { url });
                }
            })
        >
            {match favicon {
                Some(src) => {
                    view! { <img class="bookmark-favicon" src=src width="18" height="18" alt="" /> }
                        .into_view()
                }
                None => view! { <Icon icon=IconName::Bookmark size=IconSize::Md /> }.into_view(),
            }}
        </Button>
    }
}

#[component]
fn AddressBar() -> impl IntoView {
    let runtime = use_browser_runtime();
    let state = runtime.state;
    let url = create_memo(move |_| state.with(|state| state.url.clone()));
    let page_title = create_memo(move |_| state.with(|state| state.page_title.clone()));
    let draft = create_rw_signal(String::new());

    // External navigation replaces whatever the user was typing.
    create_effect(move |_| draft.set(url.get()));

    view! {
        <TextField
            variant=FieldVariant::Inset
            layout_class="address-bar"
            aria_label="Address"
            placeholder="Enter a URL"
            input_type="url"
            title=page_title
            value=draft
            on_input=Callback::new(move |ev| draft.set(event_target_value(&ev)))
            on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    runtime.dispatch_action(BrowserAction::NavigateTo {
                        url: draft.get_untracked(),
                    });
                }
            })
        />
    }
}
