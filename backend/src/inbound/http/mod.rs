//! HTTP inbound adapter exposing the mobile endpoints.
//!
//! `dispatch` owns the single `/mobile_api/{action}` route; each action
//! module translates form fields into port calls and shapes the JSON the
//! mobile clients expect.

pub mod auth;
pub mod courses;
pub mod courseware;
pub mod dispatch;
pub mod enrollments;
pub mod error;
pub mod form;
pub mod health;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
