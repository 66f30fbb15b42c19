use actix_web::{web, App, HttpServer};
use leagues::config::AppConfig;
use leagues::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use leagues::routes;
use leagues::state::AppState;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // The hosted store is external; until one is wired in, leagues live in memory.
    let data = web::Data::new(AppState::in_memory(config.season.clone()));
    let origins = config.cors_allowed_origins.clone();

    info!(
        host = %config.host,
        port = config.port,
        default_weeks = config.season.default_weeks,
        max_members = config.season.max_members,
        max_weeks = config.season.max_weeks,
        "Starting Thrive Leagues backend"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
