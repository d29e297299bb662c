use actix_web::{HttpRequest, Responder, get, post, web};
use uuid::Uuid;

use schoolpress::admin::{resolve_editing, DeleteArm, FieldErrors, SubmitAction};
use schoolpress::db;

use crate::web::forms::{AdminListQuery, DeleteForm, SyllabusForm};
use crate::web::helpers::{list_or_empty, render, require_session, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminSyllabusTemplate;

#[get("/admin/syllabus")]
pub async fn page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminListQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let entries = list_or_empty(db::list_syllabus(&state.pool).await, "syllabus");

    let form = match resolve_editing(&entries, query.edit) {
        Some(entry) => SyllabusForm::from_record(entry),
        None => SyllabusForm::default(),
    };

    render(AdminSyllabusTemplate {
        entries,
        form,
        errors: FieldErrors::new(),
        armed: DeleteArm::new(query.confirm),
        saved: query.saved.is_some(),
        save_failed: query.error.is_some(),
    })
}

#[post("/admin/syllabus")]
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<SyllabusForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let entries = list_or_empty(db::list_syllabus(&state.pool).await, "syllabus");
            return render(AdminSyllabusTemplate {
                entries,
                form: form.into_inner(),
                errors,
                armed: DeleteArm::default(),
                saved: false,
                save_failed: false,
            });
        }
    };

    let result = match SubmitAction::for_form(form.id) {
        SubmitAction::Insert => db::create_syllabus_entry(&state.pool, &input)
            .await
            .map(|_| ()),
        SubmitAction::Update(id) => db::update_syllabus_entry(&state.pool, id, &input)
            .await
            .map(|_| ()),
    };

    match result {
        Ok(()) => see_other("/admin/syllabus?saved=1"),
        Err(e) => {
            log::error!("Failed to save syllabus entry: {}", e);
            let entries = list_or_empty(db::list_syllabus(&state.pool).await, "syllabus");
            render(AdminSyllabusTemplate {
                entries,
                form: form.into_inner(),
                errors: FieldErrors::new(),
                armed: DeleteArm::default(),
                saved: false,
                save_failed: true,
            })
        }
    }
}

#[post("/admin/syllabus/{id}/delete")]
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
        return see_other("/admin/syllabus");
    }

    match db::delete_syllabus_entry(&state.pool, id).await {
        Ok(()) => see_other("/admin/syllabus"),
        Err(e) => {
            log::error!("Failed to delete syllabus entry: {}", e);
            see_other("/admin/syllabus?error=delete")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page).service(submit).service(delete);
}
