use crate::Principal;

/// Tri-state view of "who is logged in".
///
/// `Unresolved` only exists between start-up and the end of bootstrap;
/// nothing that depends on authentication may decide while in it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unresolved,
    Anonymous,
    Authenticated(Principal),
}

impl SessionState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Anonymous => "anonymous",
            Self::Authenticated(_) => "authenticated",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
