use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use schoolpress::admin::{
    is_valid_email, is_valid_optional_url, is_valid_url, FieldErrors,
};
use schoolpress::models::{
    parse_highlights, parse_schedule, highlights_to_text, schedule_to_text, ApplicationCreate,
    ContactDetail, ContactDetailInput, EnquiryCreate, Event, EventInput, GalleryImage,
    GalleryInput, HeroSlide, HeroSlideInput, NewsInput, NewsItem, Program, ProgramInput,
    StaffInput, StaffMember, SyllabusEntry, SyllabusInput, Testimonial, TestimonialInput,
};

/// Query state shared by every admin list page: the editing selection, the
/// armed delete row, the master/detail selection and the local filter/search.
#[derive(Debug, Default, Deserialize)]
pub struct AdminListQuery {
    pub edit: Option<Uuid>,
    pub confirm: Option<Uuid>,
    pub selected: Option<Uuid>,
    pub status: Option<String>,
    pub q: Option<String>,
    pub saved: Option<String>,
    pub error: Option<String>,
}

impl AdminListQuery {
    pub fn status_filter(&self) -> String {
        self.status.clone().unwrap_or_else(|| "all".to_string())
    }

    pub fn search(&self) -> String {
        self.q.clone().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub armed: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct NoteForm {
    pub note: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub bucket: String,
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct GalleryPageQuery {
    pub category: Option<String>,
}

fn required(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

fn optional(s: &str) -> Option<String> {
    required(s)
}

// -------------------------------------------------------------------------
// Public forms
// -------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnquiryForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl EnquiryForm {
    pub fn validate(&self) -> Result<EnquiryCreate, FieldErrors> {
        let mut errors = FieldErrors::new();

        if required(&self.first_name).is_none() {
            errors.add("first_name", "First name is required");
        }
        if required(&self.last_name).is_none() {
            errors.add("last_name", "Last name is required");
        }
        if !is_valid_email(&self.email) {
            errors.add("email", "Must be a valid email address");
        }
        if required(&self.subject).is_none() {
            errors.add("subject", "Subject is required");
        }
        if required(&self.message).is_none() {
            errors.add("message", "Message is required");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EnquiryCreate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub grade: String,
    pub previous_school: String,
    pub address: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub parent_email: String,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<ApplicationCreate, FieldErrors> {
        let mut errors = FieldErrors::new();

        if required(&self.first_name).is_none() {
            errors.add("first_name", "First name is required");
        }
        if required(&self.last_name).is_none() {
            errors.add("last_name", "Last name is required");
        }
        if !is_valid_email(&self.email) {
            errors.add("email", "Must be a valid email address");
        }
        if required(&self.phone).is_none() {
            errors.add("phone", "Phone number is required");
        }
        if required(&self.grade).is_none() {
            errors.add("grade", "Grade is required");
        }
        if required(&self.parent_name).is_none() {
            errors.add("parent_name", "Parent name is required");
        }
        if required(&self.parent_phone).is_none() {
            errors.add("parent_phone", "Parent phone is required");
        }
        if !self.parent_email.trim().is_empty() && !is_valid_email(&self.parent_email) {
            errors.add("parent_email", "Must be a valid email address");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ApplicationCreate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            grade: self.grade.trim().to_string(),
            previous_school: optional(&self.previous_school),
            address: optional(&self.address),
            parent_name: self.parent_name.trim().to_string(),
            parent_phone: self.parent_phone.trim().to_string(),
            parent_email: optional(&self.parent_email),
        })
    }
}

// -------------------------------------------------------------------------
// Admin resource forms. Each mirrors one table's editable columns as text
// fields, re-renders with per-field messages when invalid, and converts to
// the typed input written by the db layer.
// -------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsForm {
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub image_url: String,
}

impl NewsForm {
    pub fn from_record(item: &NewsItem) -> Self {
        Self {
            id: Some(item.id),
            title: item.title.clone(),
            content: item.content.clone(),
            image_url: item.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<NewsInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        if required(&self.title).is_none() {
            errors.add("title", "Title is required");
        }
        if required(&self.content).is_none() {
            errors.add("content", "Content is required");
        }
        if !is_valid_optional_url(&self.image_url) {
            errors.add("image_url", "Must be a valid URL");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewsInput {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            image_url: optional(&self.image_url),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventForm {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub image_url: String,
    pub highlights: String,
    pub schedule: String,
}

impl EventForm {
    pub fn from_record(event: &Event) -> Self {
        Self {
            id: Some(event.id),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.format("%Y-%m-%d").to_string(),
            time: event.time.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            image_url: event.image_url.clone().unwrap_or_default(),
            highlights: highlights_to_text(&event.highlights),
            schedule: schedule_to_text(&event.schedule),
        }
    }

    pub fn validate(&self) -> Result<EventInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        if required(&self.title).is_none() {
            errors.add("title", "Title is required");
        }
        if required(&self.description).is_none() {
            errors.add("description", "Description is required");
        }

        let date = match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                if self.date.trim().is_empty() {
                    errors.add("date", "Date is required");
                } else {
                    errors.add("date", "Must be a valid date (YYYY-MM-DD)");
                }
                None
            }
        };

        if !is_valid_optional_url(&self.image_url) {
            errors.add("image_url", "Must be a valid URL");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EventInput {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            date: date.expect("validated above"),
            time: optional(&self.time),
            location: optional(&self.location),
            image_url: optional(&self.image_url),
            highlights: parse_highlights(&self.highlights),
            schedule: parse_schedule(&self.schedule),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryForm {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
}

impl GalleryForm {
    pub fn from_record(image: &GalleryImage) -> Self {
        Self {
            id: Some(image.id),
            title: image.title.clone(),
            description: image.description.clone().unwrap_or_default(),
            image_url: image.image_url.clone(),
            category: image.category.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<GalleryInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        if required(&self.title).is_none() {
            errors.add("title", "Title is required");
        }
        if !is_valid_url(&self.image_url) {
            errors.add("image_url", "Must be a valid URL");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(GalleryInput {
            title: self.title.trim().to_string(),
            description: optional(&self.description),
            image_url: self.image_url.trim().to_string(),
            category: optional(&self.category),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramForm {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub features: String,
}

impl ProgramForm {
    pub fn from_record(program: &Program) -> Self {
        Self {
            id: Some(program.id),
            title: program.title.clone(),
            description: program.description.clone(),
            image_url: program.image_url.clone().unwrap_or_default(),
            features: highlights_to_text(&program.features),
        }
    }

    pub fn validate(&self) -> Result<ProgramInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        if required(&self.title).is_none() {
            errors.add("title", "Title is required");
        }
        if required(&self.description).is_none() {
            errors.add("description", "Description is required");
        }
        if !is_valid_optional_url(&self.image_url) {
            errors.add("image_url", "Must be a valid URL");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProgramInput {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: optional(&self.image_url),
            features: parse_highlights(&self.features),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffForm {
    pub id: Option<Uuid>,
    pub name: String,
    pub position: String,
    pub image_url: String,
    pub bio: String,
}

impl StaffForm {
    pub fn from_record(member: &StaffMember) -> Self {
        Self {
            id: Some(member.id),
            name: member.name.clone(),
            position: member.position.clone(),
            image_url: member.image_url.clone().unwrap_or_default(),
            bio: member.bio.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<StaffInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        if required(&self.name).is_none() {
            errors.add("name", "Name is required");
        }
        if required(&self.position).is_none() {
            errors.add("position", "Position is required");
        }
        if !is_valid_optional_url(&self.image_url) {
            errors.add("image_url", "Must be a valid URL");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(StaffInput {
            name: self.name.trim().to_string(),
            position: self.position.trim().to_string(),
            image_url: optional(&self.image_url),
            bio: optional(&self.bio),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialForm {
    pub id: Option<Uuid>,
    pub name: String,
    pub role: String,
    pub content: String,
    pub image_url: String,
}

impl TestimonialForm {
    pub fn from_record(testimonial: &Testimonial) -> Self {
        Self {
            id: Some(testimonial.id),
            name: testimonial.name.clone(),
            role: testimonial.role.clone().unwrap_or_default(),
            content: testimonial.content.clone(),
            image_url: testimonial.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<TestimonialInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        if required(&self.name).is_none() {
            errors.add("name", "Name is required");
        }
        if required(&self.content).is_none() {
            errors.add("content", "Content is required");
        }
        if !is_valid_optional_url(&self.image_url) {
            errors.add("image_url", "Must be a valid URL");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TestimonialInput {
            name: self.name.trim().to_string(),
            role: optional(&self.role),
            content: self.content.trim().to_string(),
            image_url: optional(&self.image_url),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroForm {
    pub id: Option<Uuid>,
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub button_text: String,
    pub button_link: String,
    pub active: Option<String>,
}

impl HeroForm {
    pub fn from_record(slide: &HeroSlide) -> Self {
        Self {
            id: Some(slide.id),
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone().unwrap_or_default(),
            image_url: slide.image_url.clone(),
            button_text: slide.button_text.clone().unwrap_or_default(),
            button_link: slide.button_link.clone().unwrap_or_default(),
            active: slide.active.then(|| "on".to_string()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn validate(&self) -> Result<HeroSlideInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        if required(&self.title).is_none() {
            errors.add("title", "Title is required");
        }
        if !is_valid_url(&self.image_url) {
            errors.add("image_url", "Must be a valid URL");
        }
        if !is_valid_optional_url(&self.button_link) {
            errors.add("button_link", "Must be a valid URL");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(HeroSlideInput {
            title: self.title.trim().to_string(),
            subtitle: optional(&self.subtitle),
            image_url: self.image_url.trim().to_string(),
            button_text: optional(&self.button_text),
            button_link: optional(&self.button_link),
            active: self.is_active(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactDetailForm {
    pub id: Option<Uuid>,
    pub title: String,
    pub value: String,
    pub action: String,
    pub r#type: String,
    pub display_order: String,
}

impl ContactDetailForm {
    pub fn type_name(&self) -> &str {
        &self.r#type
    }

    pub fn from_record(detail: &ContactDetail) -> Self {
        Self {
            id: Some(detail.id),
            title: detail.title.clone(),
            value: detail.value.clone(),
            action: detail.action.clone().unwrap_or_default(),
            r#type: detail.r#type.clone(),
            display_order: detail.display_order.to_string(),
        }
    }

    pub fn validate(&self) -> Result<ContactDetailInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        if required(&self.title).is_none() {
            errors.add("title", "Title is required");
        }
        if required(&self.value).is_none() {
            errors.add("value", "Value is required");
        }
        if required(&self.r#type).is_none() {
            errors.add("type", "Type is required");
        }

        let display_order = match self.display_order.trim().parse::<i32>() {
            Ok(n) => Some(n),
            Err(_) if self.display_order.trim().is_empty() => Some(0),
            Err(_) => {
                errors.add("display_order", "Must be a number");
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactDetailInput {
            title: self.title.trim().to_string(),
            value: self.value.trim().to_string(),
            action: optional(&self.action),
            r#type: self.r#type.trim().to_string(),
            display_order: display_order.expect("validated above"),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyllabusForm {
    pub id: Option<Uuid>,
    pub grade: String,
    pub level: String,
    pub description: String,
    pub file_url: String,
}

impl SyllabusForm {
    pub fn from_record(entry: &SyllabusEntry) -> Self {
        Self {
            id: Some(entry.id),
            grade: entry.grade.clone(),
            level: entry.level.clone(),
            description: entry.description.clone().unwrap_or_default(),
            file_url: entry.file_url.clone(),
        }
    }

    pub fn validate(&self) -> Result<SyllabusInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        if required(&self.grade).is_none() {
            errors.add("grade", "Grade is required");
        }
        if required(&self.level).is_none() {
            errors.add("level", "Level is required");
        }
        if !is_valid_url(&self.file_url) {
            errors.add("file_url", "Must be a valid URL");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SyllabusInput {
            grade: self.grade.trim().to_string(),
            level: self.level.trim().to_string(),
            description: optional(&self.description),
            file_url: self.file_url.trim().to_string(),
        })
    }
}
