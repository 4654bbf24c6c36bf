use std::collections::HashSet;

use crate::model::{User, UserId};

/// Hands out ids for users created locally.
///
/// The counter only moves forward and is bumped past the highest id already
/// present, so an id freed by a delete is never handed out again. Once the
/// counter would pass `UserId::MAX` it falls back to the lowest id not in
/// use, which may be one that was freed earlier.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    /// `None` once the counter has run past `UserId::MAX`.
    next: Option<UserId>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, existing: &[User]) -> UserId {
        let floor = existing
            .iter()
            .map(|user| user.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        match (self.next, floor) {
            (Some(next), Some(floor)) => {
                let id = next.max(floor);
                self.next = id.checked_add(1);
                id
            }
            _ => {
                self.next = None;
                lowest_free(existing)
            }
        }
    }
}

fn lowest_free(existing: &[User]) -> UserId {
    let taken: HashSet<UserId> = existing.iter().map(|user| user.id).collect();
    // fewer users than ids, so a gap always exists
    (1..=UserId::MAX)
        .find(|id| !taken.contains(id))
        .unwrap_or_default()
}
