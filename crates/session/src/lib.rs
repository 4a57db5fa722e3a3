//! `stocklink-session` — the logged-in identity and its lifecycle.
//!
//! No global mutable state: the current user is an explicit [`Session`]
//! value held by a [`SessionStore`], persisted behind the narrow
//! [`SessionStorage`] abstraction with load-at-startup and
//! clear-on-logout lifecycle methods.

pub mod role;
pub mod session;
pub mod store;

pub use role::Role;
pub use session::Session;
pub use store::{InMemoryStorage, JsonFileStorage, SessionError, SessionStorage, SessionStore};
