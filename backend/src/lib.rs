//! LMS mobile API library: domain model, ports, HTTP adapters and
//! configuration for the `/mobile_api/{action}` endpoint.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{CsrfCookie, Trace};
