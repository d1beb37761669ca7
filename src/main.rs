use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod utils;

/// Shared application state: the chat service (the only stateful piece)
/// and the instant the process came up, for the health endpoint.
pub struct AppState {
    pub chat: services::ChatService,
    pub started_at: Instant,
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let config = config::get();

    // Conversation history lives in data/chat_history.json; the store
    // creates the directory on first write.
    let store = services::FileStore::new("data");
    let chat = services::ChatService::restore(store).await;

    let shared_state = Arc::new(AppState {
        chat,
        started_at: Instant::now(),
    });

    let app = Router::new()
        .route("/api/health", get(health_check))
        .merge(handlers::chat::chat_routes())
        .merge(handlers::dashboard::dashboard_routes())
        .merge(handlers::architecture::architecture_routes())
        .fallback(route_not_found)
        .layer(axum::middleware::from_fn(
            middleware::logging::request_logging_middleware,
        ))
        .layer(cors_layer(&config.cors_origin))
        .layer(Extension(shared_state));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("Failed to bind listen port");
    tracing::info!(
        "🚀 NextGen AI backend listening on {}",
        listener.local_addr().unwrap()
    );
    axum::serve(listener, app).await.unwrap();
}

// Production-grade logging configuration
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,nextgen_backend=trace,hyper=info,tower=info".to_string()
        } else {
            "info,nextgen_backend=info,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        // JSON logging for production (easier for log aggregation)
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed()
    } else {
        // Human-readable logging for development
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let config = config::get();
    tracing::info!("🧠 NextGen AI backend starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("📝 Environment: {}", config.app_env);
    tracing::info!(
        "Configuration - Port: {}, CORS origin: {}, Log level: {}",
        config.port,
        config.cors_origin,
        log_level
    );

    Ok(())
}

/// The frontend is served from a different origin, so the browser needs
/// the configured origin allowed with credentials.
fn cors_layer(origin: &str) -> CorsLayer {
    let origin = origin
        .parse::<HeaderValue>()
        .expect("CORS_ORIGIN must be a valid header value");
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// GET /api/health
async fn health_check(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
    }))
}

async fn route_not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found", "path": uri.path() })),
    )
}
