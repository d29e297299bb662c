use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::AdminRecord;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewsInput {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

impl AdminRecord for NewsItem {
    fn record_id(&self) -> Uuid {
        self.id
    }
}
