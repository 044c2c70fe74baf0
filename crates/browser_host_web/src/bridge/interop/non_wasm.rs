use super::*;

fn unsupported() -> String {
    "Tauri commands are only available when compiled for wasm32".to_string()
}

pub async fn invoke<A, T>(_command: &str, _args: &A) -> Result<T, String>
where
    A: Serialize + ?Sized,
    T: DeserializeOwned,
{
    Err(unsupported())
}

pub async fn invoke_unit<A>(_command: &str, _args: &A) -> Result<(), String>
where
    A: Serialize + ?Sized,
{
    Err(unsupported())
}

pub async fn listen(event: BackendEvent, _handler: EventHandler) -> Result<Subscription, String> {
    Ok(Subscription::detached(event))
}
