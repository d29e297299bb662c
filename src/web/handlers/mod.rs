pub mod admin_applications;
pub mod admin_contact_details;
pub mod admin_enquiries;
pub mod admin_events;
pub mod admin_gallery;
pub mod admin_hero;
pub mod admin_news;
pub mod admin_programs;
pub mod admin_staff;
pub mod admin_syllabus;
pub mod admin_testimonials;
pub mod auth;
pub mod dashboard;
pub mod public;
pub mod uploads;
