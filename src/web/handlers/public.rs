use actix_web::{HttpResponse, Responder, get, post, web};
use uuid::Uuid;

use schoolpress::db;

use crate::web::forms::{ApplicationForm, EnquiryForm, GalleryPageQuery};
use crate::web::helpers::{list_or_empty, render, see_other};
use crate::web::state::AppState;
use crate::web::templates::{
    AboutTemplate, ApplyPageTemplate, ContactPageTemplate, EventDetailTemplate,
    EventsPageTemplate, GalleryPageTemplate, HomeTemplate, NewsPageTemplate,
    ProgramsPageTemplate, SyllabusPageTemplate,
};

#[derive(serde::Deserialize)]
pub struct SubmittedQuery {
    pub submitted: Option<String>,
}

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let slides = list_or_empty(
        db::list_active_hero_slides(&state.pool).await,
        "hero slides",
    );
    let mut news_items = list_or_empty(db::list_news(&state.pool).await, "news");
    news_items.truncate(3);
    let upcoming_events = list_or_empty(db::list_upcoming_events(&state.pool, 3).await, "events");
    let testimonials = list_or_empty(db::list_testimonials(&state.pool).await, "testimonials");

    render(HomeTemplate {
        slides,
        news: news_items,
        events: upcoming_events,
        testimonials,
    })
}

#[get("/about")]
pub async fn about(state: web::Data<AppState>) -> impl Responder {
    let staff = list_or_empty(db::list_staff(&state.pool).await, "staff");

    render(AboutTemplate { staff })
}

#[get("/gallery")]
pub async fn gallery(
    state: web::Data<AppState>,
    query: web::Query<GalleryPageQuery>,
) -> impl Responder {
    let images = list_or_empty(db::list_gallery(&state.pool).await, "gallery");

    let mut categories: Vec<String> = images
        .iter()
        .filter_map(|i| i.category.clone())
        .collect();
    categories.sort();
    categories.dedup();

    let category = query.category.clone().unwrap_or_default();
    let visible: Vec<_> = images
        .iter()
        .filter(|i| category.is_empty() || i.category.as_deref() == Some(category.as_str()))
        .cloned()
        .collect();

    render(GalleryPageTemplate {
        images: visible,
        categories,
        category,
    })
}

#[get("/events")]
pub async fn events(state: web::Data<AppState>) -> impl Responder {
    let events = list_or_empty(db::list_events(&state.pool).await, "events");

    render(EventsPageTemplate { events })
}

#[get("/events/{id}")]
pub async fn event_detail(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match db::get_event(&state.pool, path.into_inner()).await {
        Ok(Some(event)) => render(EventDetailTemplate { event }),
        Ok(None) => HttpResponse::NotFound().body("Not found"),
        Err(e) => {
            log::error!("Failed to fetch event: {}", e);
            HttpResponse::NotFound().body("Not found")
        }
    }
}

#[get("/programs")]
pub async fn programs(state: web::Data<AppState>) -> impl Responder {
    let programs = list_or_empty(db::list_programs(&state.pool).await, "programs");

    render(ProgramsPageTemplate { programs })
}

#[get("/syllabus")]
pub async fn syllabus(state: web::Data<AppState>) -> impl Responder {
    let entries = list_or_empty(db::list_syllabus(&state.pool).await, "syllabus");

    render(SyllabusPageTemplate { entries })
}

#[get("/news")]
pub async fn news(state: web::Data<AppState>) -> impl Responder {
    let items = list_or_empty(db::list_news(&state.pool).await, "news");

    render(NewsPageTemplate { items })
}

#[get("/contact")]
pub async fn contact(
    state: web::Data<AppState>,
    query: web::Query<SubmittedQuery>,
) -> impl Responder {
    let details = list_or_empty(db::list_contact_details(&state.pool).await, "contact details");

    render(ContactPageTemplate {
        details,
        form: EnquiryForm::default(),
        errors: Default::default(),
        submitted: query.submitted.is_some(),
    })
}

#[post("/contact")]
pub async fn contact_submit(
    state: web::Data<AppState>,
    form: web::Form<EnquiryForm>,
) -> impl Responder {
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            let details =
                list_or_empty(db::list_contact_details(&state.pool).await, "contact details");
            return render(ContactPageTemplate {
                details,
                form: form.into_inner(),
                errors,
                submitted: false,
            });
        }
    };

    match db::create_enquiry(&state.pool, &data).await {
        Ok(_) => see_other("/contact?submitted=1"),
        Err(e) => {
            log::error!("Failed to save enquiry: {}", e);
            let details =
                list_or_empty(db::list_contact_details(&state.pool).await, "contact details");
            render(ContactPageTemplate {
                details,
                form: form.into_inner(),
                errors: Default::default(),
                submitted: false,
            })
        }
    }
}

#[get("/apply")]
pub async fn apply(query: web::Query<SubmittedQuery>) -> impl Responder {
    render(ApplyPageTemplate {
        form: ApplicationForm::default(),
        errors: Default::default(),
        submitted: query.submitted.is_some(),
    })
}

#[post("/apply")]
pub async fn apply_submit(
    state: web::Data<AppState>,
    form: web::Form<ApplicationForm>,
) -> impl Responder {
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            return render(ApplyPageTemplate {
                form: form.into_inner(),
                errors,
                submitted: false,
            });
        }
    };

    match db::create_application(&state.pool, &data).await {
        Ok(_) => see_other("/apply?submitted=1"),
        Err(e) => {
            log::error!("Failed to save application: {}", e);
            render(ApplyPageTemplate {
                form: form.into_inner(),
                errors: Default::default(),
                submitted: false,
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(about)
        .service(gallery)
        .service(events)
        .service(event_detail)
        .service(programs)
        .service(syllabus)
        .service(news)
        .service(contact)
        .service(contact_submit)
        .service(apply)
        .service(apply_submit);
}
