use actix_web::{HttpRequest, Responder, get, post, web};
use uuid::Uuid;

use schoolpress::admin::{resolve_editing, DeleteArm, FieldErrors, SubmitAction};
use schoolpress::db;

use crate::web::forms::{AdminListQuery, DeleteForm, TestimonialForm};
use crate::web::helpers::{list_or_empty, render, require_session, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminTestimonialsTemplate;

#[get("/admin/testimonials")]
pub async fn page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminListQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let testimonials = list_or_empty(db::list_testimonials(&state.pool).await, "testimonials");

    let form = match resolve_editing(&testimonials, query.edit) {
        Some(testimonial) => TestimonialForm::from_record(testimonial),
        None => TestimonialForm::default(),
    };

    render(AdminTestimonialsTemplate {
        testimonials,
        form,
        errors: FieldErrors::new(),
        armed: DeleteArm::new(query.confirm),
        saved: query.saved.is_some(),
        save_failed: query.error.is_some(),
    })
}

#[post("/admin/testimonials")]
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<TestimonialForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let testimonials =
                list_or_empty(db::list_testimonials(&state.pool).await, "testimonials");
            return render(AdminTestimonialsTemplate {
                testimonials,
                form: form.into_inner(),
                errors,
                armed: DeleteArm::default(),
                saved: false,
                save_failed: false,
            });
        }
    };

    let result = match SubmitAction::for_form(form.id) {
        SubmitAction::Insert => db::create_testimonial(&state.pool, &input).await.map(|_| ()),
        SubmitAction::Update(id) => db::update_testimonial(&state.pool, id, &input)
            .await
            .map(|_| ()),
    };

    match result {
        Ok(()) => see_other("/admin/testimonials?saved=1"),
        Err(e) => {
            log::error!("Failed to save testimonial: {}", e);
            let testimonials =
                list_or_empty(db::list_testimonials(&state.pool).await, "testimonials");
            render(AdminTestimonialsTemplate {
                testimonials,
                form: form.into_inner(),
                errors: FieldErrors::new(),
                armed: DeleteArm::default(),
                saved: false,
                save_failed: true,
            })
        }
    }
}

#[post("/admin/testimonials/{id}/delete")]
pub async fn delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<DeleteForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let id = path.into_inner();

    if !DeleteArm::new(form.armed).confirms(id) {
        return see_other("/admin/testimonials");
    }

    match db::delete_testimonial(&state.pool, id).await {
        Ok(()) => see_other("/admin/testimonials"),
        Err(e) => {
            log::error!("Failed to delete testimonial: {}", e);
            see_other("/admin/testimonials?error=delete")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page).service(submit).service(delete);
}
