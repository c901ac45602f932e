//! Port for microsite configuration.
//!
//! Microsites brand a hostname and restrict it to one organization's
//! courses. The registry resolves hostnames to organizations and lists every
//! organization claimed by some microsite.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::Error;

/// Microsite configuration port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MicrositeRegistry: Send + Sync {
    /// Organization served by the microsite answering on `host`, if any.
    async fn course_org_filter(&self, host: Option<String>) -> Result<Option<String>, Error>;

    /// Every organization claimed by a microsite.
    async fn all_orgs(&self) -> Result<BTreeSet<String>, Error>;
}

/// Deployment without microsites.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMicrositeRegistry;

#[async_trait]
impl MicrositeRegistry for FixtureMicrositeRegistry {
    async fn course_org_filter(&self, _host: Option<String>) -> Result<Option<String>, Error> {
        Ok(None)
    }

    async fn all_orgs(&self) -> Result<BTreeSet<String>, Error> {
        Ok(BTreeSet::new())
    }
}
