use actix_web::{HttpRequest, Responder, get, web};

use schoolpress::db;

use crate::web::helpers::{render, require_session};
use crate::web::state::AppState;
use crate::web::templates::AdminDashboardTemplate;

#[get("/admin")]
pub async fn dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    let counts = match db::dashboard_counts(&state.pool).await {
        Ok(counts) => counts,
        Err(e) => {
            log::error!("Failed to fetch dashboard counts: {}", e);
            Default::default()
        }
    };

    render(AdminDashboardTemplate { counts })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard);
}
