use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{ContactDetail, ContactDetailInput};

pub async fn list_contact_details(pool: &PgPool) -> Result<Vec<ContactDetail>, sqlx::Error> {
    sqlx::query_as::<_, ContactDetail>(
        r#"
        SELECT * FROM contact_details
        ORDER BY display_order ASC, created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_contact_detail(
    pool: &PgPool,
    data: &ContactDetailInput,
) -> Result<ContactDetail, sqlx::Error> {
    sqlx::query_as::<_, ContactDetail>(
        r#"
        INSERT INTO contact_details (title, value, action, type, display_order)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.value)
    .bind(data.action.as_deref())
    .bind(&data.r#type)
    .bind(data.display_order)
    .fetch_one(pool)
    .await
}

pub async fn update_contact_detail(
    pool: &PgPool,
    id: Uuid,
    data: &ContactDetailInput,
) -> Result<Option<ContactDetail>, sqlx::Error> {
    sqlx::query_as::<_, ContactDetail>(
        r#"
        UPDATE contact_details
        SET title = $1, value = $2, action = $3, type = $4, display_order = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.value)
    .bind(data.action.as_deref())
    .bind(&data.r#type)
    .bind(data.display_order)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_contact_detail(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM contact_details WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
