#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Append a history entry
    Push,
    /// Overwrite the current history entry so "back" does not return here
    Replace,
}

/// Host routing, as seen by the session layer
pub trait Navigator: Send + Sync {
    fn current(&self) -> String;

    fn navigate(&self, path: &str, mode: NavigationMode);
}
