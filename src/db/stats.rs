use sqlx::PgPool;

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardCounts {
    pub news: i64,
    pub events: i64,
    pub gallery: i64,
    pub programs: i64,
    pub staff: i64,
    pub testimonials: i64,
    pub new_enquiries: i64,
    pub pending_applications: i64,
}

async fn count(pool: &PgPool, sql: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(sql).fetch_one(pool).await
}

pub async fn dashboard_counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
    Ok(DashboardCounts {
        news: count(pool, "SELECT COUNT(*) FROM news").await?,
        events: count(pool, "SELECT COUNT(*) FROM events").await?,
        gallery: count(pool, "SELECT COUNT(*) FROM gallery").await?,
        programs: count(pool, "SELECT COUNT(*) FROM programs").await?,
        staff: count(pool, "SELECT COUNT(*) FROM staff").await?,
        testimonials: count(pool, "SELECT COUNT(*) FROM testimonials").await?,
        new_enquiries: count(pool, "SELECT COUNT(*) FROM enquiries WHERE status = 'new'").await?,
        pending_applications: count(
            pool,
            "SELECT COUNT(*) FROM applications WHERE status = 'pending'",
        )
        .await?,
    })
}
