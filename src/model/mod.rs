mod ids;
mod user;

pub use ids::IdAllocator;
pub use user::{Address, User, UserId};
