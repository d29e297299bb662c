mod common;

#[cfg(test)]
pub mod db_tests {
    use chrono::{Duration, NaiveDate, Utc};
    use sqlx::PgPool;
    use uuid::Uuid;

    use super::common::*;

    use schoolpress::db;
    use schoolpress::models::*;

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_user_rejects_duplicate_email(pool: PgPool) {
        let data = UserCreate {
            email: "admin@test.com".to_string(),
            password_hash: "hash".to_string(),
        };

        let first = db::create_user(&pool, &data)
            .await
            .expect("Failed to create user");
        assert!(first.is_some());

        let second = db::create_user(&pool, &data)
            .await
            .expect("Duplicate insert should not error");
        assert!(second.is_none(), "Duplicate email should yield no row");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_session_lifecycle(pool: PgPool) {
        let user = db::create_user(
            &pool,
            &UserCreate {
                email: "admin@test.com".to_string(),
                password_hash: "hash".to_string(),
            },
        )
        .await
        .expect("Failed to create user")
        .expect("User should be created");

        let session = db::create_session(&pool, user.id)
            .await
            .expect("Failed to create session");
        assert_eq!(session.user_id, user.id);
        assert!(!session.is_expired(Utc::now()));

        let found = db::find_valid_session(&pool, session.token)
            .await
            .expect("Failed to look up session");
        assert_eq!(found, Some(session.clone()));

        db::revoke_session(&pool, session.token)
            .await
            .expect("Failed to revoke session");

        // A revoked token no longer resolves, so the guard denies it.
        let found = db::find_valid_session(&pool, session.token)
            .await
            .expect("Failed to look up session");
        assert!(found.is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_expired_session_is_treated_as_absent(pool: PgPool) {
        let user = db::create_user(
            &pool,
            &UserCreate {
                email: "admin@test.com".to_string(),
                password_hash: "hash".to_string(),
            },
        )
        .await
        .expect("Failed to create user")
        .expect("User should be created");

        let token = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO sessions (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(token)
        .bind(user.id)
        .bind(Utc::now() - Duration::hours(1))
        .execute(&pool)
        .await
        .expect("Failed to insert expired session");

        let found = db::find_valid_session(&pool, token)
            .await
            .expect("Failed to look up session");
        assert!(found.is_none());

        let purged = db::purge_expired_sessions(&pool)
            .await
            .expect("Failed to purge sessions");
        assert_eq!(purged, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_news_create_update_delete(pool: PgPool) {
        let created = db::create_news(
            &pool,
            &NewsInput {
                title: "Term dates announced".to_string(),
                content: "The new term starts in April.".to_string(),
                image_url: None,
            },
        )
        .await
        .expect("Failed to create news item");

        assert_eq!(created.title, "Term dates announced");
        assert!(created.image_url.is_none());

        let updated = db::update_news(
            &pool,
            created.id,
            &NewsInput {
                title: "Term dates updated".to_string(),
                content: created.content.clone(),
                image_url: Some("https://cdn.example.com/news.jpg".to_string()),
            },
        )
        .await
        .expect("Failed to update news item")
        .expect("Row should exist");

        assert_eq!(updated.title, "Term dates updated");
        assert_eq!(
            updated.image_url.as_deref(),
            Some("https://cdn.example.com/news.jpg")
        );

        db::delete_news(&pool, created.id)
            .await
            .expect("Failed to delete news item");

        let remaining = db::list_news(&pool).await.expect("Failed to list news");
        assert!(remaining.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_missing_news_row_yields_none(pool: PgPool) {
        let result = db::update_news(
            &pool,
            Uuid::new_v4(),
            &NewsInput {
                title: "Ghost".to_string(),
                content: "Ghost".to_string(),
                image_url: None,
            },
        )
        .await
        .expect("Update of a missing row should not error");

        assert!(result.is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_event_array_fields_round_trip(pool: PgPool) {
        let input = get_seed_event_input();

        let created = db::create_event(&pool, &input)
            .await
            .expect("Failed to create event");

        assert_eq!(created.highlights.0, input.highlights);
        assert_eq!(created.schedule.0, input.schedule);

        let fetched = db::get_event(&pool, created.id)
            .await
            .expect("Failed to fetch event")
            .expect("Event should exist");

        assert_eq!(fetched.highlights.0, input.highlights);
        assert_eq!(fetched.schedule.0, input.schedule);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_event_update_replaces_arrays_and_touches_timestamp(pool: PgPool) {
        let created = db::create_event(&pool, &get_seed_event_input())
            .await
            .expect("Failed to create event");

        let mut changed = get_seed_event_input();
        changed.highlights = vec!["New highlight".to_string()];
        changed.schedule.clear();
        changed.date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();

        let updated = db::update_event(&pool, created.id, &changed)
            .await
            .expect("Failed to update event")
            .expect("Event should exist");

        assert_eq!(updated.highlights.0, vec!["New highlight".to_string()]);
        assert!(updated.schedule.is_empty());
        assert!(updated.updated_at >= created.updated_at);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_hero_slides_append_to_end_and_swap(pool: PgPool) {
        let input = |title: &str| HeroSlideInput {
            title: title.to_string(),
            subtitle: None,
            image_url: "https://cdn.example.com/slide.jpg".to_string(),
            button_text: None,
            button_link: None,
            active: true,
        };

        let first = db::create_hero_slide(&pool, &input("First"))
            .await
            .expect("Failed to create slide");
        let second = db::create_hero_slide(&pool, &input("Second"))
            .await
            .expect("Failed to create slide");

        assert!(
            second.position > first.position,
            "New slides should land at the end of the carousel"
        );

        // Adjacent swap: each row takes the other's position value.
        db::set_hero_position(&pool, first.id, second.position)
            .await
            .expect("Failed to set position");
        db::set_hero_position(&pool, second.id, first.position)
            .await
            .expect("Failed to set position");

        let slides = db::list_hero_slides(&pool)
            .await
            .expect("Failed to list slides");

        assert_eq!(slides[0].id, second.id);
        assert_eq!(slides[1].id, first.id);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_enquiry_status_change_persists(pool: PgPool) {
        let created = db::create_enquiry(
            &pool,
            &EnquiryCreate {
                first_name: "Maya".to_string(),
                last_name: "Shrestha".to_string(),
                email: "maya@example.com".to_string(),
                subject: "Admissions".to_string(),
                message: "When does enrolment open?".to_string(),
            },
        )
        .await
        .expect("Failed to create enquiry");

        assert_eq!(created.status, EnquiryStatus::New);

        let updated = db::set_enquiry_status(&pool, created.id, EnquiryStatus::InProgress)
            .await
            .expect("Failed to set status")
            .expect("Row should exist");
        assert_eq!(updated.status, EnquiryStatus::InProgress);

        // A fresh fetch sees the persisted value.
        let refetched = db::get_enquiry(&pool, created.id)
            .await
            .expect("Failed to fetch enquiry")
            .expect("Row should exist");
        assert_eq!(refetched.status, EnquiryStatus::InProgress);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_enquiry_notes_write_whole_column(pool: PgPool) {
        let created = db::create_enquiry(
            &pool,
            &EnquiryCreate {
                first_name: "Maya".to_string(),
                last_name: "Shrestha".to_string(),
                email: "maya@example.com".to_string(),
                subject: "Admissions".to_string(),
                message: "When does enrolment open?".to_string(),
            },
        )
        .await
        .expect("Failed to create enquiry");
        assert!(created.notes.is_none());

        let updated = db::set_enquiry_notes(&pool, created.id, "2026-03-01 09:30: Called back")
            .await
            .expect("Failed to set notes")
            .expect("Row should exist");

        assert_eq!(
            updated.notes.as_deref(),
            Some("2026-03-01 09:30: Called back")
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_application_submission_persists_verbatim(pool: PgPool) {
        let data = get_seed_application_create();

        let created = db::create_application(&pool, &data)
            .await
            .expect("Failed to create application");

        assert_eq!(created.status, ApplicationStatus::Pending);
        assert_eq!(created.first_name, "Asha");
        assert_eq!(created.last_name, "Gurung");
        assert_eq!(created.email, "asha@example.com");
        assert_eq!(created.phone, "9800000000");
        assert_eq!(created.grade, "grade5");
        assert_eq!(created.address.as_deref(), Some("Kathmandu"));
        assert_eq!(created.parent_name, "Ram Gurung");
        assert_eq!(created.parent_phone, "9811111111");
        assert_eq!(created.parent_email.as_deref(), Some("ram@example.com"));
        assert!(created.previous_school.is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_dashboard_counts(pool: PgPool) {
        db::create_enquiry(
            &pool,
            &EnquiryCreate {
                first_name: "Maya".to_string(),
                last_name: "Shrestha".to_string(),
                email: "maya@example.com".to_string(),
                subject: "Admissions".to_string(),
                message: "Hello".to_string(),
            },
        )
        .await
        .expect("Failed to create enquiry");

        db::create_application(&pool, &get_seed_application_create())
            .await
            .expect("Failed to create application");

        let counts = db::dashboard_counts(&pool)
            .await
            .expect("Failed to fetch counts");

        assert_eq!(counts.new_enquiries, 1);
        assert_eq!(counts.pending_applications, 1);
        assert_eq!(counts.news, 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_contact_details_listed_by_display_order(pool: PgPool) {
        let detail = |title: &str, order: i32| ContactDetailInput {
            title: title.to_string(),
            value: "value".to_string(),
            action: None,
            r#type: "phone".to_string(),
            display_order: order,
        };

        db::create_contact_detail(&pool, &detail("Second", 2))
            .await
            .expect("Failed to create detail");
        db::create_contact_detail(&pool, &detail("First", 1))
            .await
            .expect("Failed to create detail");

        let details = db::list_contact_details(&pool)
            .await
            .expect("Failed to list details");

        assert_eq!(details[0].title, "First");
        assert_eq!(details[1].title, "Second");
    }
}
