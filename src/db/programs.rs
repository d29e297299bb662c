use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Program, ProgramInput};

pub async fn list_programs(pool: &PgPool) -> Result<Vec<Program>, sqlx::Error> {
    sqlx::query_as::<_, Program>(
        r#"
        SELECT * FROM programs
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_program(pool: &PgPool, data: &ProgramInput) -> Result<Program, sqlx::Error> {
    sqlx::query_as::<_, Program>(
        r#"
        INSERT INTO programs (title, description, image_url, features)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.image_url.as_deref())
    .bind(Json(&data.features))
    .fetch_one(pool)
    .await
}

pub async fn update_program(
    pool: &PgPool,
    id: Uuid,
    data: &ProgramInput,
) -> Result<Option<Program>, sqlx::Error> {
    sqlx::query_as::<_, Program>(
        r#"
        UPDATE programs
        SET title = $1, description = $2, image_url = $3, features = $4
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.image_url.as_deref())
    .bind(Json(&data.features))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_program(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM programs WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
