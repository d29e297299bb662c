use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewsInput, NewsItem};

pub async fn list_news(pool: &PgPool) -> Result<Vec<NewsItem>, sqlx::Error> {
    sqlx::query_as::<_, NewsItem>(
        r#"
        SELECT * FROM news
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_news(pool: &PgPool, data: &NewsInput) -> Result<NewsItem, sqlx::Error> {
    sqlx::query_as::<_, NewsItem>(
        r#"
        INSERT INTO news (title, content, image_url)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.content)
    .bind(data.image_url.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn update_news(
    pool: &PgPool,
    id: Uuid,
    data: &NewsInput,
) -> Result<Option<NewsItem>, sqlx::Error> {
    sqlx::query_as::<_, NewsItem>(
        r#"
        UPDATE news
        SET title = $1, content = $2, image_url = $3
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.content)
    .bind(data.image_url.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_news(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM news WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
