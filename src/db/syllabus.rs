use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{SyllabusEntry, SyllabusInput};

pub async fn list_syllabus(pool: &PgPool) -> Result<Vec<SyllabusEntry>, sqlx::Error> {
    sqlx::query_as::<_, SyllabusEntry>(
        r#"
        SELECT * FROM syllabus
        ORDER BY grade ASC, level ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_syllabus_entry(
    pool: &PgPool,
    data: &SyllabusInput,
) -> Result<SyllabusEntry, sqlx::Error> {
    sqlx::query_as::<_, SyllabusEntry>(
        r#"
        INSERT INTO syllabus (grade, level, description, file_url)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&data.grade)
    .bind(&data.level)
    .bind(data.description.as_deref())
    .bind(&data.file_url)
    .fetch_one(pool)
    .await
}

pub async fn update_syllabus_entry(
    pool: &PgPool,
    id: Uuid,
    data: &SyllabusInput,
) -> Result<Option<SyllabusEntry>, sqlx::Error> {
    sqlx::query_as::<_, SyllabusEntry>(
        r#"
        UPDATE syllabus
        SET grade = $1, level = $2, description = $3, file_url = $4
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&data.grade)
    .bind(&data.level)
    .bind(data.description.as_deref())
    .bind(&data.file_url)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_syllabus_entry(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM syllabus WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
