use sqlx::PgPool;
use std::sync::Arc;

use schoolpress::services::{AuthEventHub, UploadStore};

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub rate_limiter: Arc<RateLimiter>,
    pub auth_events: AuthEventHub,
    pub uploads: Arc<UploadStore>,
}
