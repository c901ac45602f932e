//! Response envelopes shared by several actions.
//!
//! Action-specific bodies live next to their handlers; these are the
//! generic `success`/`status` shapes mobile clients branch on.

use serde::Serialize;
use utoipa::ToSchema;

/// `{"success": bool}` answered by `init` and `logout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SuccessBody {
    pub success: bool,
}

/// `{"status": bool}` soft outcome used instead of HTTP errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusBody {
    pub status: bool,
}

impl StatusBody {
    /// The `{"status": false}` answer for anonymous or unavailable requests.
    pub const UNAVAILABLE: Self = Self { status: false };
}
