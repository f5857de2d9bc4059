use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A restaurant and the ids of its menu items. Older backend revisions sent
/// the country under `location`; both spellings deserialize into `country`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub menu_item_ids: Vec<String>,
    #[serde(alias = "location")]
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
