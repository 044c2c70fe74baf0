use super::*;
use js_sys::{Function, Promise};
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
function tauriApi() {
  const api = globalThis.__TAURI__;
  if (!api || !api.core || !api.event) {
    throw new Error('Tauri API is unavailable in this webview');
  }
  return api;
}

export async function jsTauriInvoke(command, args) {
  return await tauriApi().core.invoke(command, args);
}

export async function jsTauriListen(eventName, handler) {
  return await tauriApi().event.listen(eventName, (event) => {
    const payload = event.payload;
    handler(typeof payload === 'string' ? payload : JSON.stringify(payload ?? null));
  });
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsTauriInvoke)]
    fn js_tauri_invoke(command: &str, args: JsValue) -> Promise;
    #[wasm_bindgen(js_name = jsTauriListen)]
    fn js_tauri_listen(event_name: &str, handler: &Function) -> Promise;
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn to_js_args<A>(args: &A) -> Result<JsValue, String>
where
    A: Serialize + ?Sized,
{
    args.serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

pub async fn invoke<A, T>(command: &str, args: &A) -> Result<T, String>
where
    A: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let value = await_promise(js_tauri_invoke(command, to_js_args(args)?)).await?;
    from_value(value).map_err(|e| format!("{command}: {e}"))
}

pub async fn invoke_unit<A>(command: &str, args: &A) -> Result<(), String>
where
    A: Serialize + ?Sized,
{
    let _ = await_promise(js_tauri_invoke(command, to_js_args(args)?)).await?;
    Ok(())
}

pub async fn listen(event: BackendEvent, handler: EventHandler) -> Result<Subscription, String> {
    let callback = Closure::<dyn FnMut(String)>::new(move |payload: String| handler(payload));
    let unlisten = await_promise(js_tauri_listen(
        event.name(),
        callback.as_ref().unchecked_ref(),
    ))
    .await?;
    let unlisten: Function = unlisten
        .dyn_into()
        .map_err(|_| format!("listen `{}` did not return an unlisten function", event.name()))?;

    Ok(Subscription::new(event, move || {
        let _ = unlisten.call0(&JsValue::NULL);
        // The JS listener is gone, so the Rust closure can be freed.
        drop(callback);
    }))
}
