use actix_web::{HttpRequest, Responder, get, post, web};
use uuid::Uuid;

use schoolpress::admin::{resolve_editing, DeleteArm, FieldErrors, SubmitAction};
use schoolpress::db;

use crate::web::forms::{AdminListQuery, DeleteForm, ProgramForm};
use crate::web::helpers::{list_or_empty, render, require_session, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminProgramsTemplate;

#[get("/admin/programs")]
pub async fn page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminListQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let programs = list_or_empty(db::list_programs(&state.pool).await, "programs");

    let form = match resolve_editing(&programs, query.edit) {
        Some(program) => ProgramForm::from_record(program),
        None => ProgramForm::default(),
    };

    render(AdminProgramsTemplate {
        programs,
        form,
        errors: FieldErrors::new(),
        armed: DeleteArm::new(query.confirm),
        saved: query.saved.is_some(),
        save_failed: query.error.is_some(),
    })
}

#[post("/admin/programs")]
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ProgramForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let programs = list_or_empty(db::list_programs(&state.pool).await, "programs");
            return render(AdminProgramsTemplate {
                programs,
                form: form.into_inner(),
                errors,
                armed: DeleteArm::default(),
                saved: false,
                save_failed: false,
            });
        }
    };

    let result = match SubmitAction::for_form(form.id) {
        SubmitAction::Insert => db::create_program(&state.pool, &input).await.map(|_| ()),
        SubmitAction::Update(id) => db::update_program(&state.pool, id, &input).await.map(|_| ()),
    };

    match result {
        Ok(()) => see_other("/admin/programs?saved=1"),
        Err(e) => {
            log::error!("Failed to save program: {}", e);
            let programs = list_or_empty(db::list_programs(&state.pool).await, "programs");
            render(AdminProgramsTemplate {
                programs,
                form: form.into_inner(),
                errors: FieldErrors::new(),
                armed: DeleteArm::default(),
                saved: false,
                save_failed: true,
            })
        }
    }
}

#[post("/admin/programs/{id}/delete")]
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
        return see_other("/admin/programs");
    }

    match db::delete_program(&state.pool, id).await {
        Ok(()) => see_other("/admin/programs"),
        Err(e) => {
            log::error!("Failed to delete program: {}", e);
            see_other("/admin/programs?error=delete")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page).service(submit).service(delete);
}
