use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{HeroSlide, HeroSlideInput};

pub async fn list_hero_slides(pool: &PgPool) -> Result<Vec<HeroSlide>, sqlx::Error> {
    sqlx::query_as::<_, HeroSlide>(
        r#"
        SELECT * FROM hero_carousel
        ORDER BY position ASC, created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn list_active_hero_slides(pool: &PgPool) -> Result<Vec<HeroSlide>, sqlx::Error> {
    sqlx::query_as::<_, HeroSlide>(
        r#"
        SELECT * FROM hero_carousel
        WHERE active
        ORDER BY position ASC, created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// New slides go to the end of the carousel.
pub async fn create_hero_slide(
    pool: &PgPool,
    data: &HeroSlideInput,
) -> Result<HeroSlide, sqlx::Error> {
    sqlx::query_as::<_, HeroSlide>(
        r#"
        INSERT INTO hero_carousel (title, subtitle, image_url, button_text, button_link, active, position)
        SELECT $1, $2, $3, $4, $5, $6, COALESCE(MAX(position), 0) + 1
        FROM hero_carousel
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(data.subtitle.as_deref())
    .bind(&data.image_url)
    .bind(data.button_text.as_deref())
    .bind(data.button_link.as_deref())
    .bind(data.active)
    .fetch_one(pool)
    .await
}

pub async fn update_hero_slide(
    pool: &PgPool,
    id: Uuid,
    data: &HeroSlideInput,
) -> Result<Option<HeroSlide>, sqlx::Error> {
    sqlx::query_as::<_, HeroSlide>(
        r#"
        UPDATE hero_carousel
        SET
            title = $1,
            subtitle = $2,
            image_url = $3,
            button_text = $4,
            button_link = $5,
            active = $6,
            updated_at = now()
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(data.subtitle.as_deref())
    .bind(&data.image_url)
    .bind(data.button_text.as_deref())
    .bind(data.button_link.as_deref())
    .bind(data.active)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// One half of an adjacent swap. The two halves are independent writes; the
/// caller re-reads the list if either fails.
pub async fn set_hero_position(pool: &PgPool, id: Uuid, position: i32) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE hero_carousel
        SET position = $1, updated_at = now()
        WHERE id = $2
        "#,
    )
    .bind(position)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_hero_slide(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM hero_carousel WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
