use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Enquiry, EnquiryCreate, EnquiryStatus};

pub async fn list_enquiries(pool: &PgPool) -> Result<Vec<Enquiry>, sqlx::Error> {
    sqlx::query_as::<_, Enquiry>(
        r#"
        SELECT * FROM enquiries
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_enquiry(pool: &PgPool, id: Uuid) -> Result<Option<Enquiry>, sqlx::Error> {
    sqlx::query_as::<_, Enquiry>(r#"SELECT * FROM enquiries WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Public contact-form submissions arrive with status `new`.
pub async fn create_enquiry(pool: &PgPool, data: &EnquiryCreate) -> Result<Enquiry, sqlx::Error> {
    sqlx::query_as::<_, Enquiry>(
        r#"
        INSERT INTO enquiries (first_name, last_name, email, subject, message)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(&data.subject)
    .bind(&data.message)
    .fetch_one(pool)
    .await
}

pub async fn set_enquiry_status(
    pool: &PgPool,
    id: Uuid,
    status: EnquiryStatus,
) -> Result<Option<Enquiry>, sqlx::Error> {
    sqlx::query_as::<_, Enquiry>(
        r#"
        UPDATE enquiries
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

/// Writes the whole notes column; append composition happens in the caller.
pub async fn set_enquiry_notes(
    pool: &PgPool,
    id: Uuid,
    notes: &str,
) -> Result<Option<Enquiry>, sqlx::Error> {
    sqlx::query_as::<_, Enquiry>(
        r#"
        UPDATE enquiries
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

pub async fn delete_enquiry(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM enquiries WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
