use crate::events::{SessionEvent, SessionEvents};
use crate::navigation::{NavigationMode, Navigator};

use std::sync::Arc;

use log::{debug, info, warn};
use rx_core::Surface;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

/// Turns session-ended events into a redirect to the login route.
///
/// Run exactly one per surface. Redirects replace the current history entry
/// and are skipped when the login route is already showing.
pub struct NavigationListener<N: Navigator> {
    surface: Surface,
    navigator: Arc<N>,
    events: SessionEvents,
    rx: broadcast::Receiver<SessionEvent>,
}

impl<N: Navigator> NavigationListener<N> {
    /// Subscribes immediately, so events published before `run` is first
    /// polled are not lost.
    pub fn new(surface: Surface, navigator: Arc<N>, events: SessionEvents) -> Self {
        let rx = events.subscribe();
        Self {
            surface,
            navigator,
            events,
            rx,
        }
    }

    /// Handle one event. Returns whether a navigation happened.
    pub fn handle(&self, event: &SessionEvent) -> bool {
        if event.surface() != self.surface {
            return false;
        }

        let login = self.surface.login_route();
        let navigated = if self.navigator.current() == login {
            debug!("Already on {login}, not redirecting after {event:?}");
            false
        } else {
            info!("Redirecting to {login} after {event:?}");
            self.navigator.navigate(login, NavigationMode::Replace);
            true
        };

        if matches!(event, SessionEvent::Invalidated { .. }) {
            self.events.rearm();
        }

        navigated
    }

    /// Handle every event already queued without waiting. Returns the number
    /// of navigations performed.
    pub fn drain(&mut self) -> usize {
        let mut navigations = 0;

        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    if self.handle(&event) {
                        navigations += 1;
                    }
                }
                Err(TryRecvError::Lagged(missed)) => {
                    warn!("{} navigation listener lagged, missed {missed} events", self.surface);
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        navigations
    }

    /// Consume events until the task is aborted
    pub async fn run(mut self) {
        loop {
            match self.rx.recv().await {
                Ok(event) => {
                    self.handle(&event);
                }
                Err(RecvError::Lagged(missed)) => {
                    warn!("{} navigation listener lagged, missed {missed} events", self.surface);
                }
                Err(RecvError::Closed) => {
                    debug!("{} session events closed", self.surface);
                    break;
                }
            }
        }
    }
}
