//! Backend push-event subscriptions.

use std::rc::Rc;

use browser_host::{BackendEvent, EventHandler, EventService, Subscription};
use leptos::logging;

use crate::reducer::BrowserAction;

/// Maps a pushed backend event to the reducer action it triggers.
pub fn action_for_event(event: BackendEvent, payload: String) -> Option<BrowserAction> {
    match event {
        BackendEvent::SettingsUpdated => {
            logging::log!("settings updated: {payload}");
            None
        }
        BackendEvent::BookmarkUpdated => Some(BrowserAction::BookmarkPayloadReceived(payload)),
        BackendEvent::ExternalNavigation => {
            Some(BrowserAction::ExternalNavigated { url: payload })
        }
        BackendEvent::ExternalPageLoaded => {
            Some(BrowserAction::ExternalPageLoaded { title: payload })
        }
    }
}

/// Subscribes `dispatch` to every [`BackendEvent`].
///
/// Events whose subscription fails are logged and skipped. Dropping the returned guards
/// unregisters the listeners.
pub async fn subscribe_backend_events(
    events: &dyn EventService,
    dispatch: impl Fn(BrowserAction) + 'static,
) -> Vec<Subscription> {
    let dispatch = Rc::new(dispatch);
    let mut subscriptions = Vec::with_capacity(BackendEvent::ALL.len());

    for event in BackendEvent::ALL {
        let dispatch = Rc::clone(&dispatch);
        let handler: EventHandler = Rc::new(move |payload: String| {
            if let Some(action) = action_for_event(event, payload) {
                dispatch(action);
            }
        });
        match events.listen(event, handler).await {
            Ok(subscription) => subscriptions.push(subscription),
            Err(err) => logging::warn!("subscribe {} failed: {err}", event.name()),
        }
    }

    subscriptions
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use browser_host::MemoryEventBus;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn subscribed() -> (MemoryEventBus, Rc<RefCell<Vec<BrowserAction>>>, Vec<Subscription>) {
        let bus = MemoryEventBus::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscriptions = block_on(subscribe_backend_events(&bus, move |action| {
            sink.borrow_mut().push(action);
        }));
        (bus, seen, subscriptions)
    }

    #[test]
    fn every_event_gets_one_listener() {
        let (bus, _, subscriptions) = subscribed();

        assert_eq!(subscriptions.len(), 4);
        for event in BackendEvent::ALL {
            assert_eq!(bus.listener_count(event), 1);
        }
    }

    #[test]
    fn pushed_events_become_actions() {
        let (bus, seen, _subscriptions) = subscribed();

        bus.emit(BackendEvent::ExternalNavigation, "https://docs.rs");
        bus.emit(BackendEvent::ExternalPageLoaded, "Docs.rs");
        bus.emit(BackendEvent::SettingsUpdated, "{}");
        bus.emit(BackendEvent::BookmarkUpdated, "{\"index\":1}");

        assert_eq!(
            *seen.borrow(),
            vec![
                BrowserAction::ExternalNavigated {
                    url: "https://docs.rs".to_string()
                },
                BrowserAction::ExternalPageLoaded {
                    title: "Docs.rs".to_string()
                },
                BrowserAction::BookmarkPayloadReceived("{\"index\":1}".to_string()),
            ]
        );
    }

    #[test]
    fn dropping_guards_releases_all_listeners() {
        let (bus, seen, subscriptions) = subscribed();

        drop(subscriptions);

        for event in BackendEvent::ALL {
            assert_eq!(bus.listener_count(event), 0);
        }
        assert_eq!(bus.emit(BackendEvent::ExternalNavigation, "https://docs.rs"), 0);
        assert!(seen.borrow().is_empty());
    }
}
