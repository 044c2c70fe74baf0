use browser_host::{BookmarkNode, FolderData};
use serde::Serialize;

use super::interop::{self, NoArgs};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexArgs {
    index: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddFolderArgs<'a> {
    parent_index: usize,
    title: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTitleArgs<'a> {
    index: usize,
    title: &'a str,
}

pub(crate) async fn nested_json(index: usize) -> Result<String, String> {
    interop::invoke("get_nested_json", &IndexArgs { index }).await
}

pub(crate) async fn toolbar_bookmarks() -> Result<Vec<BookmarkNode>, String> {
    interop::invoke("get_toolbar_bookmarks", &NoArgs {}).await
}

pub(crate) async fn root_and_children_folders() -> Result<Vec<FolderData>, String> {
    interop::invoke("get_root_and_children_folders", &NoArgs {}).await
}

pub(crate) async fn add_folder(parent_index: usize, title: &str) -> Result<(), String> {
    interop::invoke_unit(
        "add_folder",
        &AddFolderArgs {
            parent_index,
            title,
        },
    )
    .await
}

pub(crate) async fn update_bookmark_title(index: usize, title: &str) -> Result<(), String> {
    interop::invoke_unit("update_bookmark_title", &UpdateTitleArgs { index, title }).await
}

pub(crate) async fn remove_bookmark(index: usize) -> Result<(), String> {
    interop::invoke_unit("remove_bookmark", &IndexArgs { index }).await
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn command_args_are_camel_case() {
        assert_eq!(
            serde_json::to_value(AddFolderArgs {
                parent_index: 3,
                title: "Later",
            })
            .expect("serialize"),
            serde_json::json!({"parentIndex": 3, "title": "Later"})
        );
        assert_eq!(
            serde_json::to_value(UpdateTitleArgs {
                index: 4,
                title: "Docs",
            })
            .expect("serialize"),
            serde_json::json!({"index": 4, "title": "Docs"})
        );
        assert_eq!(
            serde_json::to_value(NoArgs {}).expect("serialize"),
            serde_json::json!({})
        );
    }
}
