use actix_web::{HttpRequest, Responder, get, post, web};
use uuid::Uuid;

use schoolpress::admin::{
    adjacent_swap_plan, resolve_editing, DeleteArm, FieldErrors, MoveDirection, SubmitAction,
};
use schoolpress::db;

use crate::web::forms::{AdminListQuery, DeleteForm, HeroForm};
use crate::web::helpers::{list_or_empty, render, require_session, see_other};
use crate::web::state::AppState;
use crate::web::templates::AdminHeroTemplate;

#[get("/admin/hero")]
pub async fn page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminListQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let slides = list_or_empty(db::list_hero_slides(&state.pool).await, "hero slides");

    let form = match resolve_editing(&slides, query.edit) {
        Some(slide) => HeroForm::from_record(slide),
        None => HeroForm::default(),
    };

    render(AdminHeroTemplate {
        slides,
        form,
        errors: FieldErrors::new(),
        armed: DeleteArm::new(query.confirm),
        saved: query.saved.is_some(),
        save_failed: query.error.is_some(),
    })
}

#[post("/admin/hero")]
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<HeroForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let slides = list_or_empty(db::list_hero_slides(&state.pool).await, "hero slides");
            return render(AdminHeroTemplate {
                slides,
                form: form.into_inner(),
                errors,
                armed: DeleteArm::default(),
                saved: false,
                save_failed: false,
            });
        }
    };

    let result = match SubmitAction::for_form(form.id) {
        SubmitAction::Insert => db::create_hero_slide(&state.pool, &input).await.map(|_| ()),
        SubmitAction::Update(id) => db::update_hero_slide(&state.pool, id, &input)
            .await
            .map(|_| ()),
    };

    match result {
        Ok(()) => see_other("/admin/hero?saved=1"),
        Err(e) => {
            log::error!("Failed to save hero slide: {}", e);
            let slides = list_or_empty(db::list_hero_slides(&state.pool).await, "hero slides");
            render(AdminHeroTemplate {
                slides,
                form: form.into_inner(),
                errors: FieldErrors::new(),
                armed: DeleteArm::default(),
                saved: false,
                save_failed: true,
            })
        }
    }
}

/// Move a slide one step up or down by swapping position values with its
/// neighbour. Boundary moves plan to nothing, so no writes are issued. The
/// redirect re-reads the list afterwards either way, which also heals the
/// view after a partial swap.
#[post("/admin/hero/{id}/move/{direction}")]
pub async fn move_slide(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, String)>,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let (id, direction) = path.into_inner();

    let Ok(direction) = direction.parse::<MoveDirection>() else {
        return see_other("/admin/hero");
    };

    let slides = match db::list_hero_slides(&state.pool).await {
        Ok(slides) => slides,
        Err(e) => {
            log::error!("Failed to fetch hero slides: {}", e);
            return see_other("/admin/hero");
        }
    };

    let Some(plan) = adjacent_swap_plan(&slides, id, direction, |s| s.position) else {
        return see_other("/admin/hero");
    };

    // Two independent writes; both are attempted even if the first fails.
    let first = db::set_hero_position(&state.pool, plan.moving.0, plan.moving.1).await;
    let second = db::set_hero_position(&state.pool, plan.target.0, plan.target.1).await;

    if let Err(e) = first {
        log::error!("Failed to reorder hero slide {}: {}", plan.moving.0, e);
    }
    if let Err(e) = second {
        log::error!("Failed to reorder hero slide {}: {}", plan.target.0, e);
    }

    see_other("/admin/hero")
}

#[post("/admin/hero/{id}/delete")]
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
        return see_other("/admin/hero");
    }

    match db::delete_hero_slide(&state.pool, id).await {
        Ok(()) => see_other("/admin/hero"),
        Err(e) => {
            log::error!("Failed to delete hero slide: {}", e);
            see_other("/admin/hero?error=delete")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page)
        .service(submit)
        .service(move_slide)
        .service(delete);
}
