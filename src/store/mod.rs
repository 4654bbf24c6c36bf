//! Application state container and the users state machine.

mod action;
mod container;
mod dispatch;
mod reducer;
mod state;

pub use action::UserAction;
pub use container::{Store, Subscription};
pub use dispatch::{Dispatch, QueuedDispatcher};
pub use reducer::UsersReducer;
pub use state::AppState;

/// The store type the application runs on.
pub type UsersStore = Store<UsersReducer>;
