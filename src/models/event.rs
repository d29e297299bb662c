use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::AdminRecord;

/// One entry of an event's day schedule.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub time: String,
    pub activity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub highlights: Json<Vec<String>>,
    pub schedule: Json<Vec<ScheduleItem>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Display form used across the site, e.g. "4 Apr 2024".
    pub fn display_date(&self) -> String {
        self.date.format("%-d %b %Y").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub highlights: Vec<String>,
    pub schedule: Vec<ScheduleItem>,
}

impl AdminRecord for Event {
    fn record_id(&self) -> Uuid {
        self.id
    }
}

/// Parses the highlights textarea, one highlight per line. Blank lines are
/// skipped; duplicates are kept (highlights are unique only by position).
pub fn parse_highlights(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn highlights_to_text(highlights: &[String]) -> String {
    highlights.join("\n")
}

/// Parses the schedule textarea, one `time | activity` pair per line. A line
/// without a separator becomes an activity with no time.
pub fn parse_schedule(text: &str) -> Vec<ScheduleItem> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|line| match line.split_once('|') {
            Some((time, activity)) => ScheduleItem {
                time: time.trim().to_string(),
                activity: activity.trim().to_string(),
            },
            None => ScheduleItem {
                time: String::new(),
                activity: line.to_string(),
            },
        })
        .collect()
}

pub fn schedule_to_text(schedule: &[ScheduleItem]) -> String {
    schedule
        .iter()
        .map(|item| {
            if item.time.is_empty() {
                item.activity.clone()
            } else {
                format!("{} | {}", item.time, item.activity)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
