use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use sqlx::PgPool;
use uuid::Uuid;

use schoolpress::db;
use schoolpress::models::Session;

pub const SESSION_COOKIE: &str = "sp_session";

/// The admin guard. Every admin handler calls this first; any failure —
/// missing cookie, malformed token, unknown or expired session, database
/// error — is treated identically to "no session" and answered with a
/// redirect to the login page. Admin markup is never rendered on the deny
/// path.
pub async fn require_session(pool: &PgPool, req: &HttpRequest) -> Result<Session, HttpResponse> {
    let token = req
        .cookie(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value().trim()).ok());

    let Some(token) = token else {
        return Err(login_redirect());
    };

    match db::find_valid_session(pool, token).await {
        Ok(Some(session)) => Ok(session),
        Ok(None) => Err(login_redirect()),
        Err(e) => {
            // Fail closed: an unreachable session store denies access.
            log::error!("Session lookup failed: {}", e);
            Err(login_redirect())
        }
    }
}

pub fn login_redirect() -> HttpResponse {
    see_other("/admin/login")
}

pub fn see_other(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.as_ref().to_string()))
        .finish()
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

/// Fetch failures are non-fatal: the page renders with an empty list and the
/// error goes to the log.
pub fn list_or_empty<T>(result: Result<Vec<T>, sqlx::Error>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::error!("Failed to fetch {}: {}", what, e);
        Vec::new()
    })
}

pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}
