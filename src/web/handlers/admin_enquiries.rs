use actix_web::{HttpRequest, Responder, get, post, web};
use chrono::Utc;
use uuid::Uuid;

use schoolpress::admin::{append_note, filter_rows, resolve_editing, DeleteArm};
use schoolpress::db;
use schoolpress::models::EnquiryStatus;

use crate::web::forms::{AdminListQuery, DeleteForm, NoteForm, StatusForm};
use crate::web::helpers::{list_or_empty, render, require_session, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminEnquiriesTemplate;

#[get("/admin/enquiries")]
pub async fn page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminListQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let enquiries = list_or_empty(db::list_enquiries(&state.pool).await, "enquiries");

    let filter = query.status_filter();
    let q = query.search();

    // The filter narrows the rendered view only; the fetched list stays
    // intact, so clearing it restores every row.
    let visible: Vec<_> = filter_rows(&enquiries, |e| {
        (filter == "all" || e.status.as_str() == filter) && e.matches_search(&q)
    })
    .into_iter()
    .cloned()
    .collect();

    // Detail pane and list render from the same fetched state, so the badge
    // and the open pane always agree.
    let selected = resolve_editing(&enquiries, query.selected).cloned();

    render(AdminEnquiriesTemplate {
        enquiries: visible,
        selected,
        filter,
        q,
        armed: DeleteArm::new(query.confirm),
    })
}

#[post("/admin/enquiries/{id}/status")]
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

    // Any status is reachable from any other.
    let Ok(status) = form.status.parse::<EnquiryStatus>() else {
        return see_other(format!("/admin/enquiries?selected={}", id));
    };

    if let Err(e) = db::set_enquiry_status(&state.pool, id, status).await {
        log::error!("Failed to update enquiry status: {}", e);
    }

    see_other(format!("/admin/enquiries?selected={}", id))
}

#[post("/admin/enquiries/{id}/notes")]
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
        return see_other(format!("/admin/enquiries?selected={}", id));
    }

    // Read-modify-write on the whole column. Two sessions appending at once
    // race last-write-wins; one note can be lost.
    let enquiry = match db::get_enquiry(&state.pool, id).await {
        Ok(Some(enquiry)) => enquiry,
        Ok(None) => return see_other("/admin/enquiries"),
        Err(e) => {
            log::error!("Failed to fetch enquiry: {}", e);
            return see_other(format!("/admin/enquiries?selected={}", id));
        }
    };

    let notes = append_note(enquiry.notes.as_deref(), Utc::now(), &form.note);

    if let Err(e) = db::set_enquiry_notes(&state.pool, id, &notes).await {
        log::error!("Failed to save enquiry note: {}", e);
    }

    see_other(format!("/admin/enquiries?selected={}", id))
}

#[post("/admin/enquiries/{id}/delete")]
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
        return see_other("/admin/enquiries");
    }

    match db::delete_enquiry(&state.pool, id).await {
        Ok(()) => see_other("/admin/enquiries"),
        Err(e) => {
            log::error!("Failed to delete enquiry: {}", e);
            see_other("/admin/enquiries?error=delete")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page)
        .service(set_status)
        .service(add_note)
        .service(delete);
}
