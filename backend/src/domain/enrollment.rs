//! Enrollment records and the change request relayed to the platform.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::UserId;

/// A learner's enrollment in a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub created: DateTime<Utc>,
    pub is_active: bool,
}

/// Organization filter applied when listing a learner's enrollments.
///
/// Microsites partition the catalogue by organization. A request served by
/// a microsite only sees that organization; every other request sees all
/// organizations except those claimed by microsites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgFilter {
    pub include: Option<String>,
    pub exclude: BTreeSet<String>,
}

impl OrgFilter {
    /// Build the filter for the current request's microsite.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use mobile_api::domain::OrgFilter;
    ///
    /// let all: BTreeSet<String> = ["HarvardX", "MITx"].map(String::from).into();
    /// let filter = OrgFilter::for_microsite(Some("MITx".into()), all);
    /// assert_eq!(filter.include.as_deref(), Some("MITx"));
    /// assert!(filter.exclude.contains("HarvardX"));
    /// assert!(!filter.exclude.contains("MITx"));
    /// ```
    #[must_use]
    pub fn for_microsite(current: Option<String>, mut microsite_orgs: BTreeSet<String>) -> Self {
        if let Some(org) = current.as_deref() {
            microsite_orgs.remove(org);
        }
        Self {
            include: current,
            exclude: microsite_orgs,
        }
    }
}

/// Enroll/unenroll request forwarded verbatim to the enrollment service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentChangeRequest {
    pub user: Option<UserId>,
    pub course_id: Option<String>,
    pub enrollment_action: Option<String>,
}

/// Raw reply from the enrollment service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentChangeResponse {
    pub status: u16,
    pub body: String,
}

impl EnrollmentChangeResponse {
    /// The body of a client-error or forbidden reply, which the mobile
    /// client shows as the refusal reason.
    ///
    /// # Examples
    /// ```
    /// use mobile_api::domain::EnrollmentChangeResponse;
    ///
    /// let refused = EnrollmentChangeResponse { status: 400, body: "Course id not specified".into() };
    /// assert_eq!(refused.rejection_reason(), Some("Course id not specified"));
    ///
    /// let ok = EnrollmentChangeResponse { status: 200, body: String::new() };
    /// assert_eq!(ok.rejection_reason(), None);
    /// ```
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        matches!(self.status, 400 | 403).then_some(self.body.as_str())
    }
}
