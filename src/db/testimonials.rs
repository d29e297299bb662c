use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Testimonial, TestimonialInput};

pub async fn list_testimonials(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        SELECT * FROM testimonials
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_testimonial(
    pool: &PgPool,
    data: &TestimonialInput,
) -> Result<Testimonial, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        INSERT INTO testimonials (name, role, content, image_url)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(data.role.as_deref())
    .bind(&data.content)
    .bind(data.image_url.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn update_testimonial(
    pool: &PgPool,
    id: Uuid,
    data: &TestimonialInput,
) -> Result<Option<Testimonial>, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        UPDATE testimonials
        SET name = $1, role = $2, content = $3, image_url = $4
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(data.role.as_deref())
    .bind(&data.content)
    .bind(data.image_url.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_testimonial(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM testimonials WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
