use actix_web::{HttpRequest, Responder, get, post, web};
use chrono::Utc;
use uuid::Uuid;

use schoolpress::admin::{append_note, filter_rows, resolve_editing, DeleteArm};
use schoolpress::db;
use schoolpress::models::ApplicationStatus;

use crate::web::forms::{AdminListQuery, DeleteForm, NoteForm, StatusForm};
use crate::web::helpers::{list_or_empty, render, require_session, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminApplicationsTemplate;

#[get("/admin/applications")]
pub async fn page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminListQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let applications = list_or_empty(db::list_applications(&state.pool).await, "applications");

    let filter = query.status_filter();
    let q = query.search();

    let visible: Vec<_> = filter_rows(&applications, |a| {
        (filter == "all" || a.status.as_str() == filter) && a.matches_search(&q)
    })
    .into_iter()
    .cloned()
    .collect();

    let selected = resolve_editing(&applications, query.selected).cloned();

    render(AdminApplicationsTemplate {
        applications: visible,
        selected,
        filter,
        q,
        armed: DeleteArm::new(query.confirm),
    })
}

#[post("/admin/applications/{id}/status")]
pub async fn set_status(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<StatusForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let id = path.into_inner();

    let Ok(status) = form.status.parse::<ApplicationStatus>() else {
        return see_other(format!("/admin/applications?selected={}", id));
    };

    if let Err(e) = db::set_application_status(&state.pool, id, status).await {
        log::error!("Failed to update application status: {}", e);
    }

    see_other(format!("/admin/applications?selected={}", id))
}

#[post("/admin/applications/{id}/notes")]
pub async fn add_note(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<NoteForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let id = path.into_inner();

    if form.note.trim().is_empty() {
        return see_other(format!("/admin/applications?selected={}", id));
    }

    let application = match db::get_application(&state.pool, id).await {
        Ok(Some(application)) => application,
        Ok(None) => return see_other("/admin/applications"),
        Err(e) => {
            log::error!("Failed to fetch application: {}", e);
            return see_other(format!("/admin/applications?selected={}", id));
        }
    };

    let notes = append_note(application.notes.as_deref(), Utc::now(), &form.note);

    if let Err(e) = db::set_application_notes(&state.pool, id, &notes).await {
        log::error!("Failed to save application note: {}", e);
    }

    see_other(format!("/admin/applications?selected={}", id))
}

#[post("/admin/applications/{id}/delete")]
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
        return see_other("/admin/applications");
    }

    match db::delete_application(&state.pool, id).await {
        Ok(()) => see_other("/admin/applications"),
        Err(e) => {
            log::error!("Failed to delete application: {}", e);
            see_other("/admin/applications?error=delete")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page)
        .service(set_status)
        .service(add_note)
        .service(delete);
}
