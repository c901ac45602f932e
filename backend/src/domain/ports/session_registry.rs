//! Port for ending a user's platform session.
//!
//! The cookie session is cleared by the HTTP adapter. This port covers
//! whatever server-side state the platform keeps (signals, audit trail).

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Session termination port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// End the session of `user_id`, or of an anonymous visitor when `None`.
    async fn end_session(&self, user_id: Option<UserId>) -> Result<(), Error>;
}

/// Registry with no server-side state.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSessionRegistry;

#[async_trait]
impl SessionRegistry for FixtureSessionRegistry {
    async fn end_session(&self, user_id: Option<UserId>) -> Result<(), Error> {
        tracing::debug!(user_id = ?user_id.map(UserId::get), "session ended");
        Ok(())
    }
}
