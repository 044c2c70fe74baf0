use browser_host::UserSettings;

use super::interop::{self, NoArgs};

pub(crate) async fn user_settings() -> Result<UserSettings, String> {
    interop::invoke("get_user_settings", &NoArgs {}).await
}
