use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Application, ApplicationCreate, ApplicationStatus};

pub async fn list_applications(pool: &PgPool) -> Result<Vec<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        r#"
        SELECT * FROM applications
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_application(pool: &PgPool, id: Uuid) -> Result<Option<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>(r#"SELECT * FROM applications WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Apply-now submissions arrive with status `pending`.
pub async fn create_application(
    pool: &PgPool,
    data: &ApplicationCreate,
) -> Result<Application, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        r#"
        INSERT INTO applications
            (first_name, last_name, email, phone, grade, previous_school,
             address, parent_name, parent_phone, parent_email)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.grade)
    .bind(data.previous_school.as_deref())
    .bind(data.address.as_deref())
    .bind(&data.parent_name)
    .bind(&data.parent_phone)
    .bind(data.parent_email.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn set_application_status(
    pool: &PgPool,
    id: Uuid,
    status: ApplicationStatus,
) -> Result<Option<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        r#"
        UPDATE applications
        SET status = $1
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(status.as_str())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn set_application_notes(
    pool: &PgPool,
    id: Uuid,
    notes: &str,
) -> Result<Option<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        r#"
        UPDATE applications
        SET notes = $1
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(notes)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_application(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM applications WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
