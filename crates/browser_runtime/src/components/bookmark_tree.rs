use browser_host::{BookmarkNode, NodeType};
use leptos::*;
use system_ui::{Icon, IconName, IconSize, Text, Tree, TreeItem};

use super::context_menu::{NodeContextMenu, NodeContextMenuState};
use crate::{
    reducer::BrowserAction,
    runtime_context::use_browser_runtime,
    tree::{indent_px, node_click, row_icon, NodeClick, RowIcon},
};

#[component]
/// Bookmark tree rooted at `root`; while `editable` holds, nodes open context menus.
///
/// Switching `editable` keeps the mounted rows and their expand state.
pub(super) fn BookmarkTree(
    root: BookmarkNode,
    #[prop(into)] editable: Signal<bool>,
) -> impl IntoView {
    let context_menu = create_rw_signal(None::<NodeContextMenuState>);

    create_effect(move |_| {
        if !editable.get() {
            context_menu.set(None);
        }
    });

    view! {
        <div class="bookmark-tree-host" data-editable=move || editable.get().to_string()>
            <Tree layout_class="bookmark-tree" aria_label="Bookmarks">
                <BookmarkTreeNode node=root level=0 editable context_menu />
            </Tree>
        </div>
        <Show when=move || editable.get()>
            <NodeContextMenu menu=context_menu />
        </Show>
    }
}

fn row_icon_view(icon: RowIcon) -> View {
    match icon {
        RowIcon::Folder { open } => {
            let icon = if open {
                IconName::FolderOpen
            } else {
                IconName::Folder
            };
            view! { <Icon icon size=IconSize::Md /> }.into_view()
        }
        RowIcon::Favicon(src) => view! {
            <img class="bookmark-favicon" src=src width="18" height="18" alt="" loading="lazy" />
        }
        .into_view(),
        RowIcon::Bookmark => {
            view! { <Icon icon=IconName::Bookmark size=IconSize::Md /> }.into_view()
        }
    }
}

#[component]
fn BookmarkTreeNode(
    node: BookmarkNode,
    level: usize,
    editable: Signal<bool>,
    context_menu: RwSignal<Option<NodeContextMenuState>>,
) -> impl IntoView {
    let runtime = use_browser_runtime();
    let expanded = create_rw_signal(true);
    let has_children = node.has_children();
    let title = node.title.clone();
    let node_type = match node.node_type {
        NodeType::Root => "root",
        NodeType::Folder => "folder",
        NodeType::Bookmark => "bookmark",
    };
    let node = store_value(node);

    let toggle = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        expanded.update(|expanded| *expanded = !*expanded);
    };

    let on_arrow_click = move |ev: web_sys::MouseEvent| {
        if has_children {
            toggle(ev);
        }
    };

    let on_body_click = move |ev: web_sys::MouseEvent| match node.with_value(node_click) {
        NodeClick::ToggleExpanded => toggle(ev),
        NodeClick::Navigate(url) => {
            runtime.dispatch_action(BrowserAction::BookmarkClicked { url })
        }
        NodeClick::Nothing => {}
    };

    let on_contextmenu = move |ev: web_sys::MouseEvent| {
        if !editable.get_untracked() {
            return;
        }
        super::stop_mouse_event(&ev);
        runtime.dispatch_action(BrowserAction::ContextMenuOpened);
        context_menu.set(Some(NodeContextMenuState {
            x: ev.client_x(),
            y: ev.client_y(),
            node: node.get_value(),
        }));
    };

    view! {
        <TreeItem
            expanded=Signal::derive(move || has_children.then(|| expanded.get()))
        >
            <div
                class="bookmark-row"
                style=format!("padding-left:{}px;", indent_px(level))
                data-node-type=node_type
                on:contextmenu=on_contextmenu
            >
                <span class="bookmark-row-arrow" on:click=on_arrow_click>
                    {move || {
                        has_children
                            .then(|| {
                                let icon = if expanded.get() {
                                    IconName::ChevronDown
                                } else {
                                    IconName::ChevronRight
                                };
                                view! { <Icon icon size=IconSize::Sm /> }
                            })
                    }}
                </span>
                <span class="bookmark-row-body" on:click=on_body_click>
                    <span class="bookmark-row-icon">
                        {move || {
                            let open = expanded.get();
                            row_icon_view(node.with_value(|node| row_icon(node, open)))
                        }}
                    </span>
                    <Text ui_slot="title">{title}</Text>
                </span>
            </div>
            <Show when=move || has_children && expanded.get()>
                <ul class="bookmark-tree-children" role="group">
                    {node
                        .with_value(|node| node.children.clone())
                        .into_iter()
                        .map(|child| {
                            view! {
                                <BookmarkTreeNode
                                    node=child
                                    level=level + 1
                                    editable
                                    context_menu
                                />
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </TreeItem>
    }
    .into_view()
}
