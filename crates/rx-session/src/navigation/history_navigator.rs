use crate::navigation::{NavigationMode, Navigator};

use std::sync::Mutex;

use log::debug;

/// In-memory history stack for hosts without a browser (CLI, tests)
pub struct HistoryNavigator {
    entries: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(vec![initial.into()]),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.entries().clone()
    }

    /// Pop the current entry. Returns the new current path, or `None` at the
    /// first entry.
    pub fn back(&self) -> Option<String> {
        let mut entries = self.entries();
        if entries.len() < 2 {
            return None;
        }
        entries.pop();
        entries.last().cloned()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Navigator for HistoryNavigator {
    fn current(&self) -> String {
        self.entries().last().cloned().unwrap_or_default()
    }

    fn navigate(&self, path: &str, mode: NavigationMode) {
        let mut entries = self.entries();
        debug!("Navigate ({mode:?}) to {path}");

        match mode {
            NavigationMode::Push => entries.push(path.to_string()),
            NavigationMode::Replace => match entries.last_mut() {
                Some(top) => *top = path.to_string(),
                None => entries.push(path.to_string()),
            },
        }
    }
}
