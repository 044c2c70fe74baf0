//! Backend push-event contracts and scoped subscriptions.

use std::{cell::RefCell, fmt, future::Future, pin::Pin, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Events pushed by the native backend to the UI.
pub enum BackendEvent {
    /// A fresh [`crate::UserSettings`] snapshot is available.
    SettingsUpdated,
    /// The bookmark tree changed; payload is the nested JSON of the root.
    BookmarkUpdated,
    /// The external webview started navigating; payload is the URL.
    ExternalNavigation,
    /// The external webview finished loading; payload is the page title.
    ExternalPageLoaded,
}

impl BackendEvent {
    /// Every event the UI subscribes to.
    pub const ALL: [Self; 4] = [
        Self::SettingsUpdated,
        Self::BookmarkUpdated,
        Self::ExternalNavigation,
        Self::ExternalPageLoaded,
    ];

    /// Wire name used by the backend when emitting the event.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SettingsUpdated => "SettingsUpdated",
            Self::BookmarkUpdated => "BookmarkUpdated",
            Self::ExternalNavigation => "ExternalNavigation",
            Self::ExternalPageLoaded => "ExternalPageLoaded",
        }
    }
}

/// Callback receiving an event's raw JSON payload.
pub type EventHandler = Rc<dyn Fn(String)>;

/// Object-safe boxed future used by [`EventService`] async methods.
pub type EventFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Live listener registration; dropping it unregisters the listener.
pub struct Subscription {
    event: BackendEvent,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a subscription that runs `release` once when unsubscribed or dropped.
    pub fn new(event: BackendEvent, release: impl FnOnce() + 'static) -> Self {
        Self {
            event,
            release: Some(Box::new(release)),
        }
    }

    /// Creates a subscription with nothing to release.
    pub fn detached(event: BackendEvent) -> Self {
        Self {
            event,
            release: None,
        }
    }

    /// Event this subscription listens to.
    pub fn event(&self) -> BackendEvent {
        self.event
    }

    /// Unregisters the listener now.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Backend service delivering push events.
pub trait EventService {
    /// Registers `handler` for `event` until the returned [`Subscription`] is released.
    fn listen<'a>(
        &'a self,
        event: BackendEvent,
        handler: EventHandler,
    ) -> EventFuture<'a, Result<Subscription, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Event service that never delivers anything.
pub struct NoopEventService;

impl EventService for NoopEventService {
    fn listen<'a>(
        &'a self,
        event: BackendEvent,
        _handler: EventHandler,
    ) -> EventFuture<'a, Result<Subscription, String>> {
        Box::pin(async move { Ok(Subscription::detached(event)) })
    }
}

#[derive(Default)]
struct BusListeners {
    next_id: u64,
    entries: Vec<(u64, BackendEvent, EventHandler)>,
}

#[derive(Clone, Default)]
/// In-process event bus used by tests and the stub host.
pub struct MemoryEventBus {
    listeners: Rc<RefCell<BusListeners>>,
}

impl MemoryEventBus {
    /// Delivers `payload` to every listener of `event`; returns how many were called.
    pub fn emit(&self, event: BackendEvent, payload: impl Into<String>) -> usize {
        let payload = payload.into();
        // Handlers may subscribe or unsubscribe while running, so call them outside the borrow.
        let handlers: Vec<EventHandler> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .filter(|(_, registered, _)| *registered == event)
            .map(|(_, _, handler)| Rc::clone(handler))
            .collect();
        for handler in &handlers {
            handler(payload.clone());
        }
        handlers.len()
    }

    /// Number of active listeners for `event`.
    pub fn listener_count(&self, event: BackendEvent) -> usize {
        self.listeners
            .borrow()
            .entries
            .iter()
            .filter(|(_, registered, _)| *registered == event)
            .count()
    }
}

impl fmt::Debug for MemoryEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryEventBus")
            .field("listeners", &self.listeners.borrow().entries.len())
            .finish()
    }
}

impl EventService for MemoryEventBus {
    fn listen<'a>(
        &'a self,
        event: BackendEvent,
        handler: EventHandler,
    ) -> EventFuture<'a, Result<Subscription, String>> {
        Box::pin(async move {
            let id = {
                let mut listeners = self.listeners.borrow_mut();
                listeners.next_id += 1;
                let id = listeners.next_id;
                listeners.entries.push((id, event, handler));
                id
            };
            let weak = Rc::downgrade(&self.listeners);
            Ok(Subscription::new(event, move || {
                if let Some(listeners) = weak.upgrade() {
                    listeners
                        .borrow_mut()
                        .entries
                        .retain(|(entry_id, _, _)| *entry_id != id);
                }
            }))
        })
    }
}
