//! Port for the platform's credential check.
//!
//! Inbound adapters hand the submitted form to this port and relay whatever
//! the authentication service answers. Handler tests substitute a double
//! instead of talking to the account service.

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use super::demo_course::{DEMO_EMAIL, DEMO_PASSWORD, demo_user_id};
use crate::domain::{Error, LoginAttempt, LoginOutcome};

/// Authentication service port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check the credentials and return the service's full response.
    ///
    /// A rejected password is a successful call carrying
    /// `"success": false`; `Err` is reserved for the service being unusable.
    async fn authenticate(&self, attempt: &LoginAttempt) -> Result<LoginOutcome, Error>;
}

/// In-memory authenticator accepting the demo staff account.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, attempt: &LoginAttempt) -> Result<LoginOutcome, Error> {
        if attempt.email() == DEMO_EMAIL && attempt.password() == DEMO_PASSWORD {
            let user_id =
                demo_user_id().ok_or_else(|| Error::internal("invalid fixture user id"))?;
            Ok(LoginOutcome::new(200, object(json!({ "success": true, "redirect_url": "/dashboard" })))
                .with_user(user_id))
        } else {
            Ok(LoginOutcome::new(
                200,
                object(json!({
                    "success": false,
                    "value": "Email or password is incorrect.",
                })),
            ))
        }
    }
}
