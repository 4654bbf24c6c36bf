//! Unidirectional data flow primitives.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: value snapshot, replaced wholesale on every transition
//! - **Action**: tagged description of an intended transition
//! - **Reducer**: pure `(State, Action) -> State`

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
