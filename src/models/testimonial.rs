use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::AdminRecord;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialInput {
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
}

impl AdminRecord for Testimonial {
    fn record_id(&self) -> Uuid {
        self.id
    }
}
