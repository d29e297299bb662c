use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{GalleryImage, GalleryInput};

pub async fn list_gallery(pool: &PgPool) -> Result<Vec<GalleryImage>, sqlx::Error> {
    sqlx::query_as::<_, GalleryImage>(
        r#"
        SELECT * FROM gallery
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_gallery_image(
    pool: &PgPool,
    data: &GalleryInput,
) -> Result<GalleryImage, sqlx::Error> {
    sqlx::query_as::<_, GalleryImage>(
        r#"
        INSERT INTO gallery (title, description, image_url, category)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(data.description.as_deref())
    .bind(&data.image_url)
    .bind(data.category.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn update_gallery_image(
    pool: &PgPool,
    id: Uuid,
    data: &GalleryInput,
) -> Result<Option<GalleryImage>, sqlx::Error> {
    sqlx::query_as::<_, GalleryImage>(
        r#"
        UPDATE gallery
        SET title = $1, description = $2, image_url = $3, category = $4
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(data.description.as_deref())
    .bind(&data.image_url)
    .bind(data.category.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_gallery_image(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM gallery WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
