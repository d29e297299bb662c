use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::AdminRecord;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactDetail {
    pub id: Uuid,
    pub title: String,
    pub value: String,
    pub action: Option<String>,
    #[sqlx(rename = "type")]
    pub r#type: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl ContactDetail {
    /// Accessor for templates, where `type` is awkward as a raw identifier.
    pub fn type_name(&self) -> &str {
        &self.r#type
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactDetailInput {
    pub title: String,
    pub value: String,
    pub action: Option<String>,
    pub r#type: String,
    pub display_order: i32,
}

impl AdminRecord for ContactDetail {
    fn record_id(&self) -> Uuid {
        self.id
    }
}
