use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use uuid::Uuid;

use schoolpress::models::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn test_id(n: u8) -> Uuid {
    Uuid::from_bytes([n; 16])
}

pub fn get_seed_slide(n: u8, position: i32) -> HeroSlide {
    HeroSlide {
        id: test_id(n),
        title: format!("Slide {}", n),
        subtitle: None,
        image_url: format!("https://cdn.example.com/slide-{}.jpg", n),
        button_text: None,
        button_link: None,
        active: true,
        position,
        created_at: parse_time("2026-01-04 22:15:06+00"),
        updated_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn get_seed_enquiry(n: u8, status: EnquiryStatus) -> Enquiry {
    Enquiry {
        id: test_id(n),
        first_name: format!("First{}", n),
        last_name: format!("Last{}", n),
        email: format!("person{}@test.com", n),
        subject: format!("Subject {}", n),
        message: "Hello, I would like to know more about admissions.".to_string(),
        status,
        notes: None,
        created_at: parse_time("2026-01-05 13:22:56+00"),
    }
}

pub fn get_seed_event(n: u8) -> Event {
    Event {
        id: test_id(n),
        title: format!("Event {}", n),
        description: "A day to remember".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 4, 4).unwrap(),
        time: Some("10:00 AM".to_string()),
        location: Some("Main Hall".to_string()),
        image_url: None,
        highlights: Json(vec!["Music".to_string(), "Food".to_string()]),
        schedule: Json(vec![ScheduleItem {
            time: "10:00".to_string(),
            activity: "Opening".to_string(),
        }]),
        created_at: parse_time("2026-01-02 18:41:18+00"),
        updated_at: parse_time("2026-01-02 18:41:18+00"),
    }
}

pub fn get_seed_event_input() -> EventInput {
    EventInput {
        title: "Sports Day".to_string(),
        description: "Annual sports day for all grades".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 4, 4).unwrap(),
        time: Some("9:00 AM".to_string()),
        location: Some("School Grounds".to_string()),
        image_url: None,
        highlights: vec!["Relay race".to_string(), "Tug of war".to_string()],
        schedule: vec![
            ScheduleItem {
                time: "9:00".to_string(),
                activity: "Warm up".to_string(),
            },
            ScheduleItem {
                time: "10:00".to_string(),
                activity: "Track events".to_string(),
            },
        ],
    }
}

pub fn get_seed_application_create() -> ApplicationCreate {
    ApplicationCreate {
        first_name: "Asha".to_string(),
        last_name: "Gurung".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9800000000".to_string(),
        grade: "grade5".to_string(),
        previous_school: None,
        address: Some("Kathmandu".to_string()),
        parent_name: "Ram Gurung".to_string(),
        parent_phone: "9811111111".to_string(),
        parent_email: Some("ram@example.com".to_string()),
    }
}
