use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dwelling_estimator::config::{LoggingSettings, Settings};
use dwelling_estimator::routes::{self, AppState};
use dwelling_estimator::services::ParameterStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber; `RUST_LOG` takes precedence over config
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_tracing(&settings.logging);

    info!("Starting dwelling price estimation service...");

    // Artifacts are loaded before the server accepts requests
    let store = Arc::new(ParameterStore::new(settings.model.artifact_paths()));
    if let Err(e) = store.load() {
        error!("Failed to load model artifacts: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()));
    }

    info!("Model ready with {} known locations", store.locations().len());

    let app_state = AppState::new(store, settings.prediction.confidence);

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
