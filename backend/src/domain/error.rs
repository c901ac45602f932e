//! Failures raised by ports and the courseware navigator.
//!
//! Nothing here knows about HTTP. `inbound::http::error` picks the status
//! code from [`ErrorCode`], and the navigator uses
//! [`ErrorCode::is_access_denial`] to decide which failures bypass its
//! degrade policy.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::TraceId;

/// Failure category, serialised in `snake_case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Form fields the action cannot work with.
    InvalidRequest,
    /// No learner is signed in.
    Unauthorized,
    /// The learner may not perform this action on the course.
    Forbidden,
    /// Unknown course or content location.
    NotFound,
    /// A collaborator misbehaved.
    InternalError,
}

impl ErrorCode {
    /// Codes produced by the catalogue's permission check.
    ///
    /// ```
    /// use mobile_api::domain::ErrorCode;
    ///
    /// assert!(ErrorCode::Forbidden.is_access_denial());
    /// assert!(!ErrorCode::InvalidRequest.is_access_denial());
    /// ```
    #[must_use]
    pub fn is_access_denial(self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden | Self::NotFound)
    }
}

/// Error body shared by every adapter.
///
/// `traceId` is filled from the request scope when the error is built, so
/// a client report can be matched to the server log.
///
/// ```
/// use mobile_api::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("course edX/Nope/2014 does not exist");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert!(err.trace_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "not_found")]
    code: ErrorCode,
    #[schema(example = "course not found")]
    message: String,
    /// Id of the request that failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "6f1c2a3e-0b4d-4c5e-8f90-a1b2c3d4e5f6")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Build an error tagged with the active trace id, if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Replace the captured trace id.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach machine-readable context, e.g. the rejected `courseId`.
    ///
    /// ```
    /// use mobile_api::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::not_found("bad course id").with_details(json!({ "courseId": "x" }));
    /// assert_eq!(err.details(), Some(&json!({ "courseId": "x" })));
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
