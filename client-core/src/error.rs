#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage_unavailable: {0}")]
    Unavailable(String),
    #[error("storage_read_failed: key={key}, reason={reason}")]
    Read { key: String, reason: String },
    #[error("storage_write_failed: key={key}, reason={reason}")]
    Write { key: String, reason: String },
}

/// A persisted session entry that could not be turned back into state.
#[derive(thiserror::Error, Debug)]
pub enum PersistedStateError {
    #[error("malformed_persisted_state: key={key}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unreadable_persisted_state: key={key}")]
    Unreadable {
        key: &'static str,
        #[source]
        source: StorageError,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteConfigError {
    #[error("duplicate route name: {0}")]
    DuplicateRoute(&'static str),
    #[error("route {route} declares unknown parent {parent}")]
    UnknownParent {
        route: &'static str,
        parent: &'static str,
    },
    #[error("route {0} is part of a parent cycle")]
    ParentCycle(&'static str),
    #[error("route {0} is referenced but not declared")]
    MissingRoute(&'static str),
    #[error("login route {0} must not require authentication")]
    GuardedLoginRoute(&'static str),
    #[error("route {0} requires admin but not authentication")]
    AdminWithoutAuth(&'static str),
}
