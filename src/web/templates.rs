use askama::Template;

use schoolpress::admin::{DeleteArm, FieldErrors};
use schoolpress::db::DashboardCounts;
use schoolpress::models::{
    Application, ContactDetail, Enquiry, Event, GalleryImage, HeroSlide, NewsItem, Program,
    StaffMember, SyllabusEntry, Testimonial,
};

use crate::web::forms::{
    ApplicationForm, ContactDetailForm, EnquiryForm, EventForm, GalleryForm, HeroForm, NewsForm,
    ProgramForm, StaffForm, SyllabusForm, TestimonialForm,
};

// -------------------------------------------------------------------------
// Public site
// -------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "public/home.html")]
pub struct HomeTemplate {
    pub slides: Vec<HeroSlide>,
    pub news: Vec<NewsItem>,
    pub events: Vec<Event>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Template)]
#[template(path = "public/about.html")]
pub struct AboutTemplate {
    pub staff: Vec<StaffMember>,
}

#[derive(Template)]
#[template(path = "public/gallery.html")]
pub struct GalleryPageTemplate {
    pub images: Vec<GalleryImage>,
    pub categories: Vec<String>,
    pub category: String,
}

#[derive(Template)]
#[template(path = "public/events.html")]
pub struct EventsPageTemplate {
    pub events: Vec<Event>,
}

#[derive(Template)]
#[template(path = "public/event.html")]
pub struct EventDetailTemplate {
    pub event: Event,
}

#[derive(Template)]
#[template(path = "public/programs.html")]
pub struct ProgramsPageTemplate {
    pub programs: Vec<Program>,
}

#[derive(Template)]
#[template(path = "public/syllabus.html")]
pub struct SyllabusPageTemplate {
    pub entries: Vec<SyllabusEntry>,
}

#[derive(Template)]
#[template(path = "public/news.html")]
pub struct NewsPageTemplate {
    pub items: Vec<NewsItem>,
}

#[derive(Template)]
#[template(path = "public/contact.html")]
pub struct ContactPageTemplate {
    pub details: Vec<ContactDetail>,
    pub form: EnquiryForm,
    pub errors: FieldErrors,
    pub submitted: bool,
}

#[derive(Template)]
#[template(path = "public/apply.html")]
pub struct ApplyPageTemplate {
    pub form: ApplicationForm,
    pub errors: FieldErrors,
    pub submitted: bool,
}

// -------------------------------------------------------------------------
// Admin
// -------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/register.html")]
pub struct AdminRegisterTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub counts: DashboardCounts,
}

#[derive(Template)]
#[template(path = "admin/news.html")]
pub struct AdminNewsTemplate {
    pub items: Vec<NewsItem>,
    pub form: NewsForm,
    pub errors: FieldErrors,
    pub armed: DeleteArm,
    pub saved: bool,
    pub save_failed: bool,
}

#[derive(Template)]
#[template(path = "admin/events.html")]
pub struct AdminEventsTemplate {
    pub events: Vec<Event>,
    pub form: EventForm,
    pub errors: FieldErrors,
    pub armed: DeleteArm,
    pub saved: bool,
    pub save_failed: bool,
}

#[derive(Template)]
#[template(path = "admin/gallery.html")]
pub struct AdminGalleryTemplate {
    pub images: Vec<GalleryImage>,
    pub form: GalleryForm,
    pub errors: FieldErrors,
    pub armed: DeleteArm,
    pub saved: bool,
    pub save_failed: bool,
}

#[derive(Template)]
#[template(path = "admin/programs.html")]
pub struct AdminProgramsTemplate {
    pub programs: Vec<Program>,
    pub form: ProgramForm,
    pub errors: FieldErrors,
    pub armed: DeleteArm,
    pub saved: bool,
    pub save_failed: bool,
}

#[derive(Template)]
#[template(path = "admin/staff.html")]
pub struct AdminStaffTemplate {
    pub members: Vec<StaffMember>,
    pub form: StaffForm,
    pub errors: FieldErrors,
    pub armed: DeleteArm,
    pub saved: bool,
    pub save_failed: bool,
}

#[derive(Template)]
#[template(path = "admin/testimonials.html")]
pub struct AdminTestimonialsTemplate {
    pub testimonials: Vec<Testimonial>,
    pub form: TestimonialForm,
    pub errors: FieldErrors,
    pub armed: DeleteArm,
    pub saved: bool,
    pub save_failed: bool,
}

#[derive(Template)]
#[template(path = "admin/hero.html")]
pub struct AdminHeroTemplate {
    pub slides: Vec<HeroSlide>,
    pub form: HeroForm,
    pub errors: FieldErrors,
    pub armed: DeleteArm,
    pub saved: bool,
    pub save_failed: bool,
}

#[derive(Template)]
#[template(path = "admin/contact_details.html")]
pub struct AdminContactDetailsTemplate {
    pub details: Vec<ContactDetail>,
    pub form: ContactDetailForm,
    pub errors: FieldErrors,
    pub armed: DeleteArm,
    pub saved: bool,
    pub save_failed: bool,
}

#[derive(Template)]
#[template(path = "admin/syllabus.html")]
pub struct AdminSyllabusTemplate {
    pub entries: Vec<SyllabusEntry>,
    pub form: SyllabusForm,
    pub errors: FieldErrors,
    pub armed: DeleteArm,
    pub saved: bool,
    pub save_failed: bool,
}

#[derive(Template)]
#[template(path = "admin/enquiries.html")]
pub struct AdminEnquiriesTemplate {
    pub enquiries: Vec<Enquiry>,
    pub selected: Option<Enquiry>,
    pub filter: String,
    pub q: String,
    pub armed: DeleteArm,
}

#[derive(Template)]
#[template(path = "admin/applications.html")]
pub struct AdminApplicationsTemplate {
    pub applications: Vec<Application>,
    pub selected: Option<Application>,
    pub filter: String,
    pub q: String,
    pub armed: DeleteArm,
}
