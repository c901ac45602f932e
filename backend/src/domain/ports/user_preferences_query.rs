//! Port for reading a user's stored preferences.
//!
//! Only the language preference is needed by the mobile login response.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Preference store port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserPreferencesQuery: Send + Sync {
    /// The user's preferred language code, if one was saved.
    async fn language_preference(&self, user_id: UserId) -> Result<Option<String>, Error>;
}

/// Fixture reporting English for every user.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserPreferencesQuery;

#[async_trait]
impl UserPreferencesQuery for FixtureUserPreferencesQuery {
    async fn language_preference(&self, _user_id: UserId) -> Result<Option<String>, Error> {
        Ok(Some("en".to_owned()))
    }
}
