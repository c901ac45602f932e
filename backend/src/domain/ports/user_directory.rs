//! Port for reading account details of a user.

use async_trait::async_trait;

use super::demo_course::DEMO_USER_ID;
use crate::domain::{Error, PlatformUser, UserId};

/// Account lookup port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the user with the given id.
    async fn find_user(&self, user_id: UserId) -> Result<PlatformUser, Error>;
}

/// Directory containing only the demo staff account.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserDirectory;

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn find_user(&self, user_id: UserId) -> Result<PlatformUser, Error> {
        if user_id.get() == DEMO_USER_ID {
            Ok(PlatformUser::new(user_id, "staff", "Staff User"))
        } else {
            Err(Error::not_found(format!("user {user_id} not found")))
        }
    }
}
