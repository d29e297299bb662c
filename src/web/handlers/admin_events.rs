use actix_web::{HttpRequest, Responder, get, post, web};
use uuid::Uuid;

use schoolpress::admin::{resolve_editing, DeleteArm, FieldErrors, SubmitAction};
use schoolpress::db;

use crate::web::forms::{AdminListQuery, DeleteForm, EventForm};
use crate::web::helpers::{list_or_empty, render, require_session, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminEventsTemplate;

#[get("/admin/events")]
pub async fn page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminListQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let events = list_or_empty(db::list_events(&state.pool).await, "events");

    // Selecting an event copies its scalar fields and both array fields
    // into the form as a snapshot.
    let form = match resolve_editing(&events, query.edit) {
        Some(event) => EventForm::from_record(event),
        None => EventForm::default(),
    };

    render(AdminEventsTemplate {
        events,
        form,
        errors: FieldErrors::new(),
        armed: DeleteArm::new(query.confirm),
        saved: query.saved.is_some(),
        save_failed: query.error.is_some(),
    })
}

#[post("/admin/events")]
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<EventForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let events = list_or_empty(db::list_events(&state.pool).await, "events");
            return render(AdminEventsTemplate {
                events,
                form: form.into_inner(),
                errors,
                armed: DeleteArm::default(),
                saved: false,
                save_failed: false,
            });
        }
    };

    let result = match SubmitAction::for_form(form.id) {
        SubmitAction::Insert => db::create_event(&state.pool, &input).await.map(|_| ()),
        SubmitAction::Update(id) => db::update_event(&state.pool, id, &input).await.map(|_| ()),
    };

    match result {
        Ok(()) => see_other("/admin/events?saved=1"),
        Err(e) => {
            log::error!("Failed to save event: {}", e);
            let events = list_or_empty(db::list_events(&state.pool).await, "events");
            render(AdminEventsTemplate {
                events,
                form: form.into_inner(),
                errors: FieldErrors::new(),
                armed: DeleteArm::default(),
                saved: false,
                save_failed: true,
            })
        }
    }
}

#[post("/admin/events/{id}/delete")]
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
        return see_other("/admin/events");
    }

    match db::delete_event(&state.pool, id).await {
        Ok(()) => see_other("/admin/events"),
        Err(e) => {
            log::error!("Failed to delete event: {}", e);
            see_other("/admin/events?error=delete")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page).service(submit).service(delete);
}
