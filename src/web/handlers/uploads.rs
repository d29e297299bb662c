use actix_web::{HttpRequest, HttpResponse, Responder, post, web};
use serde_json::json;

use crate::web::forms::UploadQuery;
use crate::web::helpers::require_session;
use crate::web::state::AppState;

/// Receives raw file bytes and answers with the public URL the form field
/// should be filled with.
#[post("/admin/uploads")]
pub async fn upload(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> impl Responder {
    if let Err(resp) = require_session(&state.pool, &req).await {
        return resp;
    }

    match state.uploads.store(&query.bucket, &query.filename, &body) {
        Ok(url) => HttpResponse::Ok().json(json!({ "url": url })),
        Err(e) => {
            log::error!("Upload failed: {}", e);
            HttpResponse::BadRequest().json(json!({ "error": "upload failed" }))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(upload);
}
