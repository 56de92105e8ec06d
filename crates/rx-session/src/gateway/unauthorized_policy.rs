/// What the gateway does when the backend answers 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnUnauthorized {
    /// End the session: clear the token, resolve to anonymous and publish
    /// an invalidation event. Used for ordinary authorized calls.
    #[default]
    Invalidate,
    /// Only report the 401 to the caller. Used where a 401 means "bad
    /// credentials" (login, registration) or where the caller cleans up
    /// itself (bootstrap).
    Report,
}
