use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Event, EventInput};

pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        SELECT * FROM events
        ORDER BY date DESC, created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn list_upcoming_events(pool: &PgPool, limit: i64) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        SELECT * FROM events
        WHERE date >= CURRENT_DATE
        ORDER BY date ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_event(pool: &PgPool, data: &EventInput) -> Result<Event, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (title, description, date, time, location, image_url, highlights, schedule)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.date)
    .bind(data.time.as_deref())
    .bind(data.location.as_deref())
    .bind(data.image_url.as_deref())
    .bind(Json(&data.highlights))
    .bind(Json(&data.schedule))
    .fetch_one(pool)
    .await
}

pub async fn update_event(
    pool: &PgPool,
    id: Uuid,
    data: &EventInput,
) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        UPDATE events
        SET
            title = $1,
            description = $2,
            date = $3,
            time = $4,
            location = $5,
            image_url = $6,
            highlights = $7,
            schedule = $8,
            updated_at = now()
        WHERE id = $9
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.date)
    .bind(data.time.as_deref())
    .bind(data.location.as_deref())
    .bind(data.image_url.as_deref())
    .bind(Json(&data.highlights))
    .bind(Json(&data.schedule))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM events WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
