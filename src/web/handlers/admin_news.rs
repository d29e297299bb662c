use actix_web::{HttpRequest, Responder, get, post, web};
use uuid::Uuid;

use schoolpress::admin::{resolve_editing, DeleteArm, FieldErrors, SubmitAction};
use schoolpress::db;

use crate::web::forms::{AdminListQuery, DeleteForm, NewsForm};
use crate::web::helpers::{list_or_empty, render, require_session, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminNewsTemplate;

#[get("/admin/news")]
pub async fn page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminListQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let items = list_or_empty(db::list_news(&state.pool).await, "news");

    let form = match resolve_editing(&items, query.edit) {
        Some(item) => NewsForm::from_record(item),
        None => NewsForm::default(),
    };

    render(AdminNewsTemplate {
        items,
        form,
        errors: FieldErrors::new(),
        armed: DeleteArm::new(query.confirm),
        saved: query.saved.is_some(),
        save_failed: query.error.is_some(),
    })
}

#[post("/admin/news")]
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<NewsForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            // Submission blocked; the form re-renders with the user's values.
            let items = list_or_empty(db::list_news(&state.pool).await, "news");
            return render(AdminNewsTemplate {
                items,
                form: form.into_inner(),
                errors,
                armed: DeleteArm::default(),
                saved: false,
                save_failed: false,
            });
        }
    };

    let result = match SubmitAction::for_form(form.id) {
        SubmitAction::Insert => db::create_news(&state.pool, &input).await.map(|_| ()),
        SubmitAction::Update(id) => db::update_news(&state.pool, id, &input).await.map(|_| ()),
    };

    match result {
        Ok(()) => see_other("/admin/news?saved=1"),
        Err(e) => {
            log::error!("Failed to save news item: {}", e);
            let items = list_or_empty(db::list_news(&state.pool).await, "news");
            render(AdminNewsTemplate {
                items,
                form: form.into_inner(),
                errors: FieldErrors::new(),
                armed: DeleteArm::default(),
                saved: false,
                save_failed: true,
            })
        }
    }
}

#[post("/admin/news/{id}/delete")]
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

    // Second phase only fires for the row that was armed.
    if !DeleteArm::new(form.armed).confirms(id) {
        return see_other("/admin/news");
    }

    match db::delete_news(&state.pool, id).await {
        Ok(()) => see_other("/admin/news"),
        Err(e) => {
            log::error!("Failed to delete news item: {}", e);
            see_other("/admin/news?error=delete")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page).service(submit).service(delete);
}
