//! Scoped DOM event listeners.
//!
//! Every listener registered through a [`ListenerGuard`] is removed again when
//! the guard is released or dropped, so remounting a component never leaves
//! stale handlers behind.

use std::fmt;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Event, EventTarget};

struct Registration {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Registration {
    fn remove(&self) -> Result<(), JsValue> {
        let listener = self.callback.as_ref().unchecked_ref();
        self.target
            .remove_event_listener_with_callback(self.event, listener)
    }
}

/// Owns a set of registered event listeners.
#[derive(Default)]
pub struct ListenerGuard {
    registrations: Vec<Registration>,
}

impl ListenerGuard {
    /// Create an empty guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event` on `target`.
    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => self.registrations.push(Registration {
                target: target.clone(),
                event,
                callback,
            }),
            Err(err) => log::warn!("failed to add {event} listener: {err:?}"),
        }
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Remove every registered listener. Safe to call more than once.
    pub fn release(&mut self) {
        for registration in self.registrations.drain(..) {
            if let Err(err) = registration.remove() {
                log::debug!("failed to remove {} listener: {err:?}", registration.event);
            }
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("listeners", &self.registrations.len())
            .finish()
    }
}
