use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::OrderStatus;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
    Cash,
    Upi,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl PaymentStatus {
    /// Mirror of an order outcome onto that order's payments: cancelling the
    /// order cancels them, delivery settles them, anything still in flight
    /// keeps them pending.
    pub fn from_order_outcome(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Cancelled => PaymentStatus::Cancelled,
            OrderStatus::Delivered => PaymentStatus::Completed,
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Preparing => {
                PaymentStatus::Pending
            }
        }
    }

    /// The edit affordance is disabled once a payment is settled.
    pub fn is_editable(self) -> bool {
        matches!(self, PaymentStatus::Pending | PaymentStatus::Failed)
    }
}

/// A monetary transaction record for one restaurant's share of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    pub menu_item_ids: Vec<String>,
    pub restaurant_id: String,
    pub order_id: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
