//! Customer details captured at checkout.

use serde::{Deserialize, Serialize};

/// Contact and delivery details attached to an order.
///
/// Field-level constraints (non-empty after trimming, phone and email
/// shapes, minimum address length) live in `checkout::validate`; this type
/// is just the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub phone: String,
    pub email: String,
    pub address: String,
}
