//! "Session ended" notifications.
//!
//! The gateway and `Session::logout` publish here; exactly one
//! `NavigationListener` per surface subscribes and performs the redirect, so
//! HTTP plumbing never touches routing directly.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use rx_core::Surface;
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected the session's credentials
    Invalidated { surface: Surface },
    /// The user signed out
    LoggedOut { surface: Surface },
}

impl SessionEvent {
    pub fn surface(&self) -> Surface {
        match self {
            Self::Invalidated { surface } | Self::LoggedOut { surface } => *surface,
        }
    }
}

/// Broadcast channel plus a one-shot latch for invalidations.
///
/// Several requests failing with 401 at once must produce a single
/// `Invalidated` event. The first caller trips the latch; later callers are
/// swallowed until the latch is re-armed by a new sign-in or by the listener
/// once it has handled the event.
#[derive(Clone)]
pub struct SessionEvents {
    tx: broadcast::Sender<SessionEvent>,
    invalidation_latched: Arc<AtomicBool>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            tx,
            invalidation_latched: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Publish `Invalidated` unless one is already pending. Returns whether it was published.
    pub fn invalidated(&self, surface: Surface) -> bool {
        if self.invalidation_latched.swap(true, Ordering::AcqRel) {
            debug!("{surface} invalidation already pending, not publishing again");
            return false;
        }

        self.publish(SessionEvent::Invalidated { surface });
        true
    }

    pub fn logged_out(&self, surface: Surface) {
        self.publish(SessionEvent::LoggedOut { surface });
    }

    /// Allow the next invalidation to be published
    pub fn rearm(&self) {
        self.invalidation_latched.store(false, Ordering::Release);
    }

    pub fn is_latched(&self) -> bool {
        self.invalidation_latched.load(Ordering::Acquire)
    }

    fn publish(&self, event: SessionEvent) {
        // Err only means nobody is listening (e.g. a headless host)
        if self.tx.send(event).is_err() {
            debug!("No listener for {event:?}");
        }
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}
