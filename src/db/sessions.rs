use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Session;

pub const SESSION_DAYS: i64 = 7;

pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<Session, sqlx::Error> {
    let token = Uuid::new_v4();
    let expires_at = Utc::now() + Duration::days(SESSION_DAYS);

    sqlx::query_as::<_, Session>(
        r#"
        INSERT INTO sessions (token, user_id, expires_at)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(token)
    .bind(user_id)
    .bind(expires_at)
    .fetch_one(pool)
    .await
}

/// Looks up a session that exists and has not expired. Expired rows are
/// treated the same as absent ones.
pub async fn find_valid_session(pool: &PgPool, token: Uuid) -> Result<Option<Session>, sqlx::Error> {
    sqlx::query_as::<_, Session>(
        r#"
        SELECT * FROM sessions
        WHERE token = $1 AND expires_at > now()
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

pub async fn revoke_session(pool: &PgPool, token: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM sessions WHERE token = $1"#)
        .bind(token)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn purge_expired_sessions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM sessions WHERE expires_at <= now()"#)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
