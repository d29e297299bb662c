use actix_web::{HttpRequest, Responder, get, post, web};
use uuid::Uuid;

use schoolpress::admin::{resolve_editing, DeleteArm, FieldErrors, SubmitAction};
use schoolpress::db;

use crate::web::forms::{AdminListQuery, ContactDetailForm, DeleteForm};
use crate::web::helpers::{list_or_empty, render, require_session, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminContactDetailsTemplate;

#[get("/admin/contact-details")]
pub async fn page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminListQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let details = list_or_empty(db::list_contact_details(&state.pool).await, "contact details");

    let form = match resolve_editing(&details, query.edit) {
        Some(detail) => ContactDetailForm::from_record(detail),
        None => ContactDetailForm::default(),
    };

    render(AdminContactDetailsTemplate {
        details,
        form,
        errors: FieldErrors::new(),
        armed: DeleteArm::new(query.confirm),
        saved: query.saved.is_some(),
        save_failed: query.error.is_some(),
    })
}

#[post("/admin/contact-details")]
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ContactDetailForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let details =
                list_or_empty(db::list_contact_details(&state.pool).await, "contact details");
            return render(AdminContactDetailsTemplate {
                details,
                form: form.into_inner(),
                errors,
                armed: DeleteArm::default(),
                saved: false,
                save_failed: false,
            });
        }
    };

    let result = match SubmitAction::for_form(form.id) {
        SubmitAction::Insert => db::create_contact_detail(&state.pool, &input)
            .await
            .map(|_| ()),
        SubmitAction::Update(id) => db::update_contact_detail(&state.pool, id, &input)
            .await
            .map(|_| ()),
    };

    match result {
        Ok(()) => see_other("/admin/contact-details?saved=1"),
        Err(e) => {
            log::error!("Failed to save contact detail: {}", e);
            let details =
                list_or_empty(db::list_contact_details(&state.pool).await, "contact details");
            render(AdminContactDetailsTemplate {
                details,
                form: form.into_inner(),
                errors: FieldErrors::new(),
                armed: DeleteArm::default(),
                saved: false,
                save_failed: true,
            })
        }
    }
}

#[post("/admin/contact-details/{id}/delete")]
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
        return see_other("/admin/contact-details");
    }

    match db::delete_contact_detail(&state.pool, id).await {
        Ok(()) => see_other("/admin/contact-details"),
        Err(e) => {
            log::error!("Failed to delete contact detail: {}", e);
            see_other("/admin/contact-details?error=delete")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page).service(submit).service(delete);
}
