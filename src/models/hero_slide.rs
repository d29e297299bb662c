use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::AdminRecord;

/// One slide of the homepage hero carousel. `position` is the sole ordering
/// key; reordering is adjacent-swap only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HeroSlide {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub active: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct HeroSlideInput {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub active: bool,
}

impl AdminRecord for HeroSlide {
    fn record_id(&self) -> Uuid {
        self.id
    }
}
