use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use std::time::Duration;
use uuid::Uuid;

use schoolpress::db;
use schoolpress::models::UserCreate;
use schoolpress::services::{self, AuthEvent};

use crate::web::forms::{AuthQuery, LoginForm, RegisterForm};
use crate::web::helpers::{client_ip, render, see_other, SESSION_COOKIE};
use crate::web::security::validate_password;
use crate::web::state::AppState;
use crate::web::templates::{AdminLoginTemplate, AdminRegisterTemplate};

fn session_cookie(token: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::days(
            db::SESSION_DAYS,
        ))
        .finish()
}

#[get("/admin/login")]
pub async fn login_form(query: web::Query<AuthQuery>) -> impl Responder {
    let error = query.error.as_deref().map(|code| match code {
        "missing" => "Email and password are required".to_string(),
        "invalid" => "Invalid email or password".to_string(),
        "rate_limit" => "Too many login attempts. Please try again later.".to_string(),
        "internal" => "An internal error occurred. Please try again.".to_string(),
        other => other.to_string(),
    });

    render(AdminLoginTemplate { error })
}

#[post("/admin/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    if !state.rate_limiter.allow(
        &format!("login:{}", client_ip(&req)),
        5,                        // 5 attempts
        Duration::from_secs(300), // per 5 minutes
    ) {
        return see_other("/admin/login?error=rate_limit");
    }

    let email = form.email.trim().to_string();
    let password = form.password.to_string();

    if email.is_empty() || password.is_empty() {
        return see_other("/admin/login?error=missing");
    }

    let user = match db::get_user_by_email(&state.pool, &email).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("Database error during login: {}", e);
            return see_other("/admin/login?error=internal");
        }
    };

    // Verify against a dummy hash when the user is unknown so both paths
    // take comparable time.
    let stored_hash = match &user {
        Some(u) => u.password_hash.clone(),
        None => services::hash_password("dummy-password-for-timing").unwrap_or_default(),
    };

    let password_valid = services::verify_password(&password, &stored_hash).unwrap_or(false);

    let Some(user) = user.filter(|_| password_valid) else {
        return see_other("/admin/login?error=invalid");
    };

    let session = match db::create_session(&state.pool, user.id).await {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to create session: {}", e);
            return see_other("/admin/login?error=internal");
        }
    };

    state
        .auth_events
        .publish(AuthEvent::SignedIn { user_id: user.id });

    HttpResponse::SeeOther()
        .cookie(session_cookie(session.token))
        .insert_header(("Location", "/admin"))
        .finish()
}

#[get("/admin/register")]
pub async fn register_form(query: web::Query<AuthQuery>) -> impl Responder {
    let error = query.error.as_deref().map(|code| match code {
        "exists" => "An account with this email already exists".to_string(),
        "email" => "Must be a valid email address".to_string(),
        "rate_limit" => "Too many registration attempts. Please try again later.".to_string(),
        "internal" => "An internal error occurred. Please try again.".to_string(),
        other => other.to_string(),
    });

    render(AdminRegisterTemplate { error })
}

#[post("/admin/register")]
pub async fn register_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<RegisterForm>,
) -> impl Responder {
    if !state.rate_limiter.allow(
        &format!("register:{}", client_ip(&req)),
        3,                         // 3 attempts
        Duration::from_secs(3600), // per hour
    ) {
        return see_other("/admin/register?error=rate_limit");
    }

    let email = form.email.trim().to_string();

    if !schoolpress::admin::is_valid_email(&email) {
        return see_other("/admin/register?error=email");
    }

    if let Err(message) = validate_password(&form.password) {
        return see_other(format!(
            "/admin/register?error={}",
            urlencoding::encode(&message)
        ));
    }

    let password_hash = match services::hash_password(&form.password) {
        Ok(hash) => hash,
        Err(e) => {
            log::error!("Password hashing error: {}", e);
            return see_other("/admin/register?error=internal");
        }
    };

    let data = UserCreate {
        email,
        password_hash,
    };

    let user = match db::create_user(&state.pool, &data).await {
        Ok(Some(user)) => user,
        Ok(None) => return see_other("/admin/register?error=exists"),
        Err(e) => {
            log::error!("Database error during registration: {}", e);
            return see_other("/admin/register?error=internal");
        }
    };

    let session = match db::create_session(&state.pool, user.id).await {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to create session: {}", e);
            return see_other("/admin/login");
        }
    };

    state
        .auth_events
        .publish(AuthEvent::SignedIn { user_id: user.id });

    HttpResponse::SeeOther()
        .cookie(session_cookie(session.token))
        .insert_header(("Location", "/admin"))
        .finish()
}

#[post("/admin/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    // Revoke server-side first so every other request carrying this cookie
    // is denied from here on.
    if let Some(token) = req
        .cookie(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value().trim()).ok())
    {
        match db::find_valid_session(&state.pool, token).await {
            Ok(Some(session)) => {
                if let Err(e) = db::revoke_session(&state.pool, token).await {
                    log::error!("Failed to revoke session: {}", e);
                }
                state.auth_events.publish(AuthEvent::SignedOut {
                    user_id: session.user_id,
                });
            }
            Ok(None) => {}
            Err(e) => log::error!("Session lookup failed during logout: {}", e),
        }
    }

    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();

    HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header(("Location", "/admin/login"))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(register_form)
        .service(register_submit)
        .service(logout);
}
