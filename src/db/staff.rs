use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{StaffInput, StaffMember};

pub async fn list_staff(pool: &PgPool) -> Result<Vec<StaffMember>, sqlx::Error> {
    sqlx::query_as::<_, StaffMember>(
        r#"
        SELECT * FROM staff
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_staff_member(
    pool: &PgPool,
    data: &StaffInput,
) -> Result<StaffMember, sqlx::Error> {
    sqlx::query_as::<_, StaffMember>(
        r#"
        INSERT INTO staff (name, position, image_url, bio)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.position)
    .bind(data.image_url.as_deref())
    .bind(data.bio.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn update_staff_member(
    pool: &PgPool,
    id: Uuid,
    data: &StaffInput,
) -> Result<Option<StaffMember>, sqlx::Error> {
    sqlx::query_as::<_, StaffMember>(
        r#"
        UPDATE staff
        SET name = $1, position = $2, image_url = $3, bio = $4
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.position)
    .bind(data.image_url.as_deref())
    .bind(data.bio.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_staff_member(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM staff WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
