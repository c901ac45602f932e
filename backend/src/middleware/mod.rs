//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, namely trace
//! correlation and the CSRF cookie mobile clients echo back.

pub mod csrf;
pub mod trace;

pub use csrf::CsrfCookie;
pub use trace::Trace;
