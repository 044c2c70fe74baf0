//! Binary entrypoint for the webview-hosted bookmark browser UI.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary runs inside the desktop webview. Build `site_app` for wasm32 with the `csr` feature, and add `desktop-tauri` to talk to the native backend."
    );
}
