use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::AdminRecord;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Program {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub features: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ProgramInput {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub features: Vec<String>,
}

impl AdminRecord for Program {
    fn record_id(&self) -> Uuid {
        self.id
    }
}
