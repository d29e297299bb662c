use actix_web::{HttpRequest, Responder, get, post, web};
use uuid::Uuid;

use schoolpress::admin::{resolve_editing, DeleteArm, FieldErrors, SubmitAction};
use schoolpress::db;

use crate::web::forms::{AdminListQuery, DeleteForm, StaffForm};
use crate::web::helpers::{list_or_empty, render, require_session, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminStaffTemplate;

#[get("/admin/staff")]
pub async fn page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminListQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let members = list_or_empty(db::list_staff(&state.pool).await, "staff");

    let form = match resolve_editing(&members, query.edit) {
        Some(member) => StaffForm::from_record(member),
        None => StaffForm::default(),
    };

    render(AdminStaffTemplate {
        members,
        form,
        errors: FieldErrors::new(),
        armed: DeleteArm::new(query.confirm),
        saved: query.saved.is_some(),
        save_failed: query.error.is_some(),
    })
}

#[post("/admin/staff")]
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<StaffForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let members = list_or_empty(db::list_staff(&state.pool).await, "staff");
            return render(AdminStaffTemplate {
                members,
                form: form.into_inner(),
                errors,
                armed: DeleteArm::default(),
                saved: false,
                save_failed: false,
            });
        }
    };

    let result = match SubmitAction::for_form(form.id) {
        SubmitAction::Insert => db::create_staff_member(&state.pool, &input)
            .await
            .map(|_| ()),
        SubmitAction::Update(id) => db::update_staff_member(&state.pool, id, &input)
            .await
            .map(|_| ()),
    };

    match result {
        Ok(()) => see_other("/admin/staff?saved=1"),
        Err(e) => {
            log::error!("Failed to save staff member: {}", e);
            let members = list_or_empty(db::list_staff(&state.pool).await, "staff");
            render(AdminStaffTemplate {
                members,
                form: form.into_inner(),
                errors: FieldErrors::new(),
                armed: DeleteArm::default(),
                saved: false,
                save_failed: true,
            })
        }
    }
}

#[post("/admin/staff/{id}/delete")]
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
        return see_other("/admin/staff");
    }

    match db::delete_staff_member(&state.pool, id).await {
        Ok(()) => see_other("/admin/staff"),
        Err(e) => {
            log::error!("Failed to delete staff member: {}", e);
            see_other("/admin/staff?error=delete")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page).service(submit).service(delete);
}
