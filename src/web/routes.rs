use actix_web::web;

use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(handlers::public::configure)
        .configure(handlers::auth::configure)
        .configure(handlers::dashboard::configure)
        .configure(handlers::uploads::configure)
        .configure(handlers::admin_news::configure)
        .configure(handlers::admin_events::configure)
        .configure(handlers::admin_gallery::configure)
        .configure(handlers::admin_programs::configure)
        .configure(handlers::admin_staff::configure)
        .configure(handlers::admin_testimonials::configure)
        .configure(handlers::admin_hero::configure)
        .configure(handlers::admin_contact_details::configure)
        .configure(handlers::admin_syllabus::configure)
        .configure(handlers::admin_enquiries::configure)
        .configure(handlers::admin_applications::configure);
}
