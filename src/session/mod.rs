//! Client-side session: who the current user is and whether they are authenticated.
//!
//! DESIGN
//! ======
//! `entity` holds the value types, `store` the observable container, and
//! `loader` the seam through which profile data reaches the store.

pub mod entity;
pub mod loader;
pub mod store;

pub use entity::{SessionState, SessionUser};
pub use loader::{FixtureUserSource, LoadError, StaticUserSource, UserSource, load_user};
pub use store::{SessionStore, Subscription};
