//! HTTP handlers and route configuration.

mod health;
mod post;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/post")
                    .route("", web::post().to(post::create_post))
                    .route("/search", web::get().to(post::search_posts)),
            ),
    );
}
