mod common;

#[cfg(test)]
pub mod model_tests {
    use chrono::{Duration, Utc};

    use super::common::*;

    use schoolpress::models::*;

    #[test]
    fn test_enquiry_status_round_trip() {
        for status in [
            EnquiryStatus::New,
            EnquiryStatus::InProgress,
            EnquiryStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<EnquiryStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_enquiry_status_rejects_unknown_value() {
        assert!("escalated".parse::<EnquiryStatus>().is_err());
    }

    #[test]
    fn test_enquiry_status_default_is_new() {
        assert_eq!(EnquiryStatus::default(), EnquiryStatus::New);
    }

    #[test]
    fn test_application_status_round_trip() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Reviewing,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ApplicationStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_application_status_default_is_pending() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Pending);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(EnquiryStatus::InProgress.label(), "In Progress");
        assert_eq!(ApplicationStatus::Reviewing.label(), "Reviewing");
    }

    #[test]
    fn test_parse_highlights_skips_blank_lines() {
        let parsed = parse_highlights("Music\n\n  Food stalls  \n");
        assert_eq!(parsed, vec!["Music".to_string(), "Food stalls".to_string()]);
    }

    #[test]
    fn test_parse_highlights_keeps_duplicates() {
        // Highlights are unique only by position.
        let parsed = parse_highlights("Prizes\nPrizes");
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_schedule_splits_time_and_activity() {
        let parsed = parse_schedule("9:00 | Warm up\n10:00 | Track events");

        assert_eq!(
            parsed,
            vec![
                ScheduleItem {
                    time: "9:00".to_string(),
                    activity: "Warm up".to_string(),
                },
                ScheduleItem {
                    time: "10:00".to_string(),
                    activity: "Track events".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_schedule_line_without_separator_is_activity_only() {
        let parsed = parse_schedule("Lunch break");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].time, "");
        assert_eq!(parsed[0].activity, "Lunch break");
    }

    #[test]
    fn test_schedule_text_round_trip() {
        let schedule = get_seed_event_input().schedule;

        let text = schedule_to_text(&schedule);
        assert_eq!(parse_schedule(&text), schedule);
    }

    #[test]
    fn test_highlights_text_round_trip() {
        let highlights = get_seed_event_input().highlights;

        let text = highlights_to_text(&highlights);
        assert_eq!(parse_highlights(&text), highlights);
    }

    #[test]
    fn test_event_display_date() {
        let event = get_seed_event(1);
        assert_eq!(event.display_date(), "4 Apr 2026");
    }

    #[test]
    fn test_session_expiry() {
        let now = Utc::now();
        let session = Session {
            token: test_id(1),
            user_id: test_id(2),
            created_at: now - Duration::days(8),
            expires_at: now - Duration::days(1),
        };

        assert!(session.is_expired(now));
        assert!(!session.is_expired(now - Duration::days(2)));
    }

    #[test]
    fn test_enquiry_search_covers_subject_and_message() {
        let enquiry = get_seed_enquiry(1, EnquiryStatus::New);

        assert!(enquiry.matches_search("subject 1"));
        assert!(enquiry.matches_search("admissions"));
        assert!(enquiry.matches_search("person1@test.com"));
        assert!(!enquiry.matches_search("scholarship"));
    }
}
