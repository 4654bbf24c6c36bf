//! Remote users endpoint: HTTP client and the fetch action creator.

mod client;
mod error;
mod fetch;

pub use client::{UsersClient, USER_AGENT};
pub use error::FetchError;
pub use fetch::{fetch_users, FetchOutcome};
