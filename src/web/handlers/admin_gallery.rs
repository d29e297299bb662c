use actix_web::{HttpRequest, Responder, get, post, web};
use uuid::Uuid;

use schoolpress::admin::{resolve_editing, DeleteArm, FieldErrors, SubmitAction};
use schoolpress::db;

use crate::web::forms::{AdminListQuery, DeleteForm, GalleryForm};
use crate::web::helpers::{list_or_empty, render, require_session, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminGalleryTemplate;

#[get("/admin/gallery")]
pub async fn page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminListQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let images = list_or_empty(db::list_gallery(&state.pool).await, "gallery");

    let form = match resolve_editing(&images, query.edit) {
        Some(image) => GalleryForm::from_record(image),
        None => GalleryForm::default(),
    };

    render(AdminGalleryTemplate {
        images,
        form,
        errors: FieldErrors::new(),
        armed: DeleteArm::new(query.confirm),
        saved: query.saved.is_some(),
        save_failed: query.error.is_some(),
    })
}

#[post("/admin/gallery")]
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<GalleryForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let images = list_or_empty(db::list_gallery(&state.pool).await, "gallery");
            return render(AdminGalleryTemplate {
                images,
                form: form.into_inner(),
                errors,
                armed: DeleteArm::default(),
                saved: false,
                save_failed: false,
            });
        }
    };

    let result = match SubmitAction::for_form(form.id) {
        SubmitAction::Insert => db::create_gallery_image(&state.pool, &input)
            .await
            .map(|_| ()),
        SubmitAction::Update(id) => db::update_gallery_image(&state.pool, id, &input)
            .await
            .map(|_| ()),
    };

    match result {
        Ok(()) => see_other("/admin/gallery?saved=1"),
        Err(e) => {
            log::error!("Failed to save gallery image: {}", e);
            let images = list_or_empty(db::list_gallery(&state.pool).await, "gallery");
            render(AdminGalleryTemplate {
                images,
                form: form.into_inner(),
                errors: FieldErrors::new(),
                armed: DeleteArm::default(),
                saved: false,
                save_failed: true,
            })
        }
    }
}

#[post("/admin/gallery/{id}/delete")]
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
        return see_other("/admin/gallery");
    }

    match db::delete_gallery_image(&state.pool, id).await {
        Ok(()) => see_other("/admin/gallery"),
        Err(e) => {
            log::error!("Failed to delete gallery image: {}", e);
            see_other("/admin/gallery?error=delete")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page).service(submit).service(delete);
}
