//! Platform user identity as seen by the mobile adapters.
//!
//! Users are owned by the platform's account service; this crate only reads
//! the identifier, username and full name to decorate login responses.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors returned when parsing a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was zero; platform ids start at one.
    #[error("user id must be a positive integer")]
    Zero,
    /// The identifier was not a decimal integer.
    #[error("user id must be numeric, got {value:?}")]
    NotNumeric { value: String },
}

/// Stable platform user identifier.
///
/// ## Invariants
/// - Always a positive integer.
///
/// # Examples
/// ```
/// use mobile_api::domain::UserId;
///
/// let id: UserId = "42".parse().expect("numeric id");
/// assert_eq!(id.get(), 42);
/// assert!(UserId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct UserId(NonZeroU64);

impl UserId {
    /// Validate and wrap a raw identifier.
    pub fn new(raw: u64) -> Result<Self, UserValidationError> {
        NonZeroU64::new(raw)
            .map(Self)
            .ok_or(UserValidationError::Zero)
    }

    /// Raw numeric identifier.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for u64 {
    fn from(value: UserId) -> Self {
        value.get()
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|_| UserValidationError::NotNumeric {
                value: s.to_owned(),
            })?;
        Self::new(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account details used to decorate a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformUser {
    id: UserId,
    username: String,
    full_name: String,
}

impl PlatformUser {
    /// Build a user record from the account service's fields.
    pub fn new(id: UserId, username: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            full_name: full_name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login handle shown to the learner.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Name from the learner's profile; may be empty.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }
}
