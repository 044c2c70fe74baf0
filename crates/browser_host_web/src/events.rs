//! Tauri event-API-backed push event service.

use browser_host::{BackendEvent, EventFuture, EventHandler, EventService, Subscription};

#[derive(Debug, Clone, Copy, Default)]
/// Event service subscribing through the Tauri event API.
pub struct TauriEventService;

impl EventService for TauriEventService {
    fn listen<'a>(
        &'a self,
        event: BackendEvent,
        handler: EventHandler,
    ) -> EventFuture<'a, Result<Subscription, String>> {
        Box::pin(async move { crate::bridge::listen(event, handler).await })
    }
}
