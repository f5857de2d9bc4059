use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchasable item belonging to a restaurant. The backend owns the record;
/// the client only mirrors it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub restaurant_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let raw = serde_json::json!({
            "_id": "m1",
            "name": "Dosa",
            "description": "Crispy",
            "price": 4.5,
            "restaurantId": "r1",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        });
        let item: MenuItem = serde_json::from_value(raw).unwrap();
        assert_eq!(item.id, "m1");
        assert_eq!(item.restaurant_id, "r1");
        assert_eq!(item.price, 4.5);
    }
}
