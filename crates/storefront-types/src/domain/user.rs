use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl Role {
    /// Members browse and buy; the cart and order-history surfaces belong to
    /// staff accounts.
    pub fn can_view_cart(self) -> bool {
        self != Role::Member
    }

    pub fn can_view_orders(self) -> bool {
        self != Role::Member
    }

    pub fn can_edit_menu(self) -> bool {
        self == Role::Admin
    }

    pub fn can_edit_payments(self) -> bool {
        self == Role::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
