pub mod error;
pub mod guard;
pub mod route;
pub mod session_store;
pub mod storage;

pub use error::{PersistedStateError, RouteConfigError, StorageError};
pub use guard::{
    AccessDenied, GuardDecision, NavigationGuard, NavigationRequest, Notice, NoticeLevel,
    ProgressIndicator, RedirectTarget, track,
};
pub use route::{RouteAccess, RouteDescriptor, RouteTable};
pub use session_store::{SessionFlags, SessionStore};
pub use storage::{KeyValueStorage, MemoryStorage};
