use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::AdminRecord;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SyllabusEntry {
    pub id: Uuid,
    pub grade: String,
    pub level: String,
    pub description: Option<String>,
    pub file_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct SyllabusInput {
    pub grade: String,
    pub level: String,
    pub description: Option<String>,
    pub file_url: String,
}

impl AdminRecord for SyllabusEntry {
    fn record_id(&self) -> Uuid {
        self.id
    }
}
