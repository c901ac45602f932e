//! Login attempt and outcome primitives.
//!
//! The credential check itself belongs to the platform's authentication
//! service. These types carry the submitted form through unchanged and hold
//! the service's verdict so the adapter can relay or decorate it.

use std::fmt;

use serde_json::{Map, Value};
use zeroize::Zeroizing;

use super::{PlatformUser, UserId};

/// Credentials exactly as the mobile client submitted them.
///
/// No validation happens here: the authentication service owns the rules
/// and reports problems in its own response payload.
///
/// # Examples
/// ```
/// use mobile_api::domain::LoginAttempt;
///
/// let attempt = LoginAttempt::new("ada@example.com", "secret", true);
/// assert_eq!(attempt.email(), "ada@example.com");
/// assert!(attempt.remember());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    email: String,
    password: Zeroizing<String>,
    remember: bool,
}

impl LoginAttempt {
    pub fn new(email: impl Into<String>, password: impl Into<String>, remember: bool) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            remember,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Whether the client asked for a persistent session.
    #[must_use]
    pub fn remember(&self) -> bool {
        self.remember
    }
}

impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember", &self.remember)
            .finish()
    }
}

/// Response produced by the authentication service.
///
/// ## Invariants
/// - `payload` is always a JSON object; the service's own keys are kept
///   verbatim.
/// - `user_id` is only meaningful when the payload reports success.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    status: u16,
    payload: Map<String, Value>,
    user_id: Option<UserId>,
}

impl LoginOutcome {
    /// Wrap the service's HTTP status and JSON payload.
    pub fn new(status: u16, payload: Map<String, Value>) -> Self {
        Self {
            status,
            payload,
            user_id: None,
        }
    }

    /// Record the user the service authenticated.
    #[must_use]
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// True when the payload carries `"success": true`.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self.payload.get("success"), Some(Value::Bool(true)))
    }

    /// The authenticated user, present only for successful outcomes.
    #[must_use]
    pub fn authenticated_user(&self) -> Option<UserId> {
        self.user_id.filter(|_| self.succeeded())
    }

    /// Add the learner's identity and language to the payload.
    ///
    /// # Examples
    /// ```
    /// use mobile_api::domain::{LoginOutcome, PlatformUser, UserId};
    /// use serde_json::{json, Map};
    ///
    /// let mut payload = Map::new();
    /// payload.insert("success".into(), json!(true));
    /// let user = PlatformUser::new(UserId::new(3).unwrap(), "ada", "Ada Lovelace");
    /// let outcome = LoginOutcome::new(200, payload).augmented(&user, Some("fr".into()));
    /// let (_, body) = outcome.into_parts();
    /// assert_eq!(body["user_name"], "ada");
    /// assert_eq!(body["language_code"], "fr");
    /// ```
    #[must_use]
    pub fn augmented(mut self, user: &PlatformUser, language: Option<String>) -> Self {
        self.payload
            .insert("user_name".to_owned(), Value::from(user.username()));
        self.payload
            .insert("user_full_name".to_owned(), Value::from(user.full_name()));
        self.payload.insert(
            "language_code".to_owned(),
            language.map_or(Value::Null, Value::from),
        );
        self
    }

    /// Consume the outcome, yielding the status and payload.
    #[must_use]
    pub fn into_parts(self) -> (u16, Map<String, Value>) {
        (self.status, self.payload)
    }
}
