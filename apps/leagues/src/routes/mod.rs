use actix_web::web;

pub mod active;
pub mod health;
pub mod leagues;
pub mod season;

/// Register every route. `main.rs` and the test app builder share this.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health, /health/details
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // League routes: /api/leagues/**
    cfg.service(web::scope("/api/leagues").configure(leagues::configure_routes));

    // Stateless generator preview: /api/season/**
    cfg.service(web::scope("/api/season").configure(season::configure_routes));

    // Active league echo: /api/active-league
    cfg.service(web::scope("/api/active-league").configure(active::configure_routes));
}
