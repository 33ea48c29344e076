//! Graph mirror event model for asynchronous sync.

use crate::domain::entities::User;
use uuid::Uuid;

/// A pending write to the social graph mirror.
///
/// Produced by [`crate::application::services::UserService`] after a
/// successful relational write and consumed by
/// [`crate::domain::sync_worker::run_sync_worker`]. Routing mirror writes
/// through a channel keeps user-facing CRUD latency independent of the graph
/// backend while still making sync failures observable.
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// The user was created or updated; merge its node into the graph.
    UserUpserted(User),
    /// The user was deleted; detach-delete its node.
    UserDeleted(Uuid),
}

impl SyncEvent {
    /// Id of the user the event refers to, for logging.
    pub fn user_id(&self) -> Uuid {
        match self {
            Self::UserUpserted(user) => user.id(),
            Self::UserDeleted(id) => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_for_both_variants() {
        let user = User::new("alice".to_string(), "alice@example.com".to_string(), None);
        let id = user.id();

        assert_eq!(SyncEvent::UserUpserted(user).user_id(), id);

        let deleted = Uuid::new_v4();
        assert_eq!(SyncEvent::UserDeleted(deleted).user_id(), deleted);
    }
}
