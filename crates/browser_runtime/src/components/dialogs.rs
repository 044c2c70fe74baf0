use leptos::*;
use system_ui::{
    Button, ButtonVariant, Cluster, FieldGroup, LayoutJustify, Modal, Stack, Text, TextField,
};

use crate::{
    model::{BookmarkTarget, DialogKind},
    reducer::BrowserAction,
    runtime_context::use_browser_runtime,
};

#[component]
/// Renders whichever bookmark dialogs are open.
pub(super) fn BookmarkDialogs() -> impl IntoView {
    let state = use_browser_runtime().state;
    let add_folder_open = create_memo(move |_| state.with(|state| state.dialogs.add_folder.open));
    let edit_target = create_memo(move |_| {
        state.with(|state| {
            let dialog = &state.dialogs.edit;
            dialog.target.clone().filter(|_| dialog.open)
        })
    });
    let delete_target = create_memo(move |_| {
        state.with(|state| {
            let dialog = &state.dialogs.delete;
            dialog.target.clone().filter(|_| dialog.open)
        })
    });

    view! {
        {move || add_folder_open.get().then(|| view! { <AddFolderDialog /> })}
        {move || edit_target.get().map(|target| view! { <EditDialog target /> })}
        {move || delete_target.get().map(|target| view! { <DeleteConfirmDialog target /> })}
    }
}

fn close_callback(kind: DialogKind) -> Callback<()> {
    let runtime = use_browser_runtime();
    Callback::new(move |()| runtime.dispatch_action(BrowserAction::CloseDialog(kind)))
}

#[component]
fn DialogActions(
    confirm_label: &'static str,
    #[prop(default = ButtonVariant::Primary)] confirm_variant: ButtonVariant,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Cluster justify=LayoutJustify::End ui_slot="actions">
            <Button on_click=Callback::new(move |_| on_cancel.call(()))>"Cancel"</Button>
            <Button
                variant=confirm_variant
                disabled=confirm_disabled
                on_click=Callback::new(move |_| on_confirm.call(()))
            >
                {confirm_label}
            </Button>
        </Cluster>
    }
}

fn on_enter(action: Callback<()>) -> Callback<web_sys::KeyboardEvent> {
    Callback::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            action.call(());
        }
    })
}

#[component]
fn AddFolderDialog() -> impl IntoView {
    let runtime = use_browser_runtime();
    let title = create_rw_signal(String::new());
    let blank = Signal::derive(move || title.with(|title| title.trim().is_empty()));
    let on_close = close_callback(DialogKind::AddFolder);
    let on_confirm = Callback::new(move |()| {
        runtime.dispatch_action(BrowserAction::ConfirmAddFolder {
            title: title.get_untracked(),
        })
    });

    view! {
        <Modal title="Add Folder" on_close>
            <Stack>
                <FieldGroup title="Folder name">
                    <TextField
                        aria_label="Folder name"
                        placeholder="New folder"
                        value=title
                        on_input=Callback::new(move |ev| title.set(event_target_value(&ev)))
                        on_keydown=on_enter(on_confirm)
                    />
                </FieldGroup>
                <DialogActions
                    confirm_label="Add"
                    confirm_disabled=blank
                    on_cancel=on_close
                    on_confirm
                />
            </Stack>
        </Modal>
    }
}

#[component]
fn EditDialog(target: BookmarkTarget) -> impl IntoView {
    let runtime = use_browser_runtime();
    let title = create_rw_signal(target.title);
    let on_close = close_callback(DialogKind::Edit);
    let on_confirm = Callback::new(move |()| {
        runtime.dispatch_action(BrowserAction::ConfirmEdit {
            title: title.get_untracked(),
        })
    });

    view! {
        <Modal title="Edit" on_close>
            <Stack>
                <FieldGroup title="Title">
                    <TextField
                        aria_label="Title"
                        value=title
                        on_input=Callback::new(move |ev| title.set(event_target_value(&ev)))
                        on_keydown=on_enter(on_confirm)
                    />
                </FieldGroup>
                <DialogActions confirm_label="Save" on_cancel=on_close on_confirm />
            </Stack>
        </Modal>
    }
}

#[component]
fn DeleteConfirmDialog(target: BookmarkTarget) -> impl IntoView {
    let runtime = use_browser_runtime();
    let on_close = close_callback(DialogKind::Delete);
    let on_confirm =
        Callback::new(move |()| runtime.dispatch_action(BrowserAction::ConfirmDelete));

    view! {
        <Modal title="Delete" on_close>
            <Stack>
                <Text>{format!("Delete \"{}\"?", target.title)}</Text>
                <DialogActions
                    confirm_label="Delete"
                    confirm_variant=ButtonVariant::Danger
                    on_cancel=on_close
                    on_confirm
                />
            </Stack>
        </Modal>
    }
}
