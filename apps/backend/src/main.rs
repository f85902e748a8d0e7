use actix_web::{web, App, HttpServer};
use backend::config::Settings;
use backend::infra::db::pool_settings;
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::telemetry;
use db_infra::sanitize_db_url;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Settings load `.env` first so RUST_LOG from the file reaches the subscriber.
    let settings = Settings::from_env();
    telemetry::init_tracing();

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    info!(
        project = %settings.project_name,
        api_prefix = %settings.api_v1_str,
        database_url = %sanitize_db_url(&settings.database_url),
        max_connections = pool_settings(&settings).max_connections,
        "starting"
    );

    let app_state = match build_state().with_settings(settings.clone()).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!("✅ Database connected and migrated");

    let bind = (settings.host.clone(), settings.port);
    println!(
        "🚀 Starting {} on http://{}:{}",
        settings.project_name, bind.0, bind.1
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        let settings = settings.clone();
        App::new()
            .wrap(cors_middleware(&settings))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(|cfg| routes::configure(cfg, &settings))
            .default_service(web::to(routes::not_found))
    })
    .bind(bind)?
    .run()
    .await
}
