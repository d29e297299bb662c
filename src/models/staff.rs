use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::AdminRecord;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct StaffInput {
    pub name: String,
    pub position: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl AdminRecord for StaffMember {
    fn record_id(&self) -> Uuid {
        self.id
    }
}
