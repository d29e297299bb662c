use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::AdminRecord;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GalleryImage {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct GalleryInput {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: Option<String>,
}

impl AdminRecord for GalleryImage {
    fn record_id(&self) -> Uuid {
        self.id
    }
}
