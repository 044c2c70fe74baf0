use browser_host_web::build_backend_services;
use browser_runtime::{BrowserProvider, BrowserShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Bookmarks" />
        <Meta name="description" content="Bookmark tree browser with an external webview panel." />

        <main class="site-root">
            <BrowserEntry />
        </main>
    }
}

#[component]
/// Browser shell wired to the compile-time selected backend.
pub fn BrowserEntry() -> impl IntoView {
    view! {
        <BrowserProvider backend_services=build_backend_services()>
            <BrowserShell />
        </BrowserProvider>
    }
}
