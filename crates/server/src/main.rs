//! Educar Backend Server
//!
//! An async Rust server that provides the administration API for Educar,
//! handling database bootstrap, school/teacher/enrollment management, and
//! dashboard statistics.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use educar_server::{
    config::{AppConfig, DatabaseConfig},
    db::{create_pool, DbPool},
    handlers,
    result_ext::ResultExt,
    services::{EnrollmentService, SchoolService, SettingsService, TeacherService},
    state::AppState,
};

/// Initialize tracing/logging.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,educar_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the application router with all routes.
fn build_router(
    state: AppState,
    db_pool: DbPool,
    school_service: SchoolService,
    teacher_service: TeacherService,
    enrollment_service: EnrollmentService,
    settings_service: SettingsService,
) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Health and connection check routes
    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/db-check", get(handlers::db_check))
        .with_state(state.clone());

    // Database bootstrap routes
    let database_routes = Router::new()
        .route("/execute-sql", post(handlers::database::execute_sql))
        .route("/db-setup", post(handlers::database::db_setup))
        .route("/db-validate", get(handlers::database::db_validate))
        .with_state(db_pool.clone());

    // Orchestrated initialization (seeding gated by config)
    let init_routes = Router::new()
        .route("/db-init", post(handlers::database::db_init))
        .with_state(state.clone());

    // School routes
    let school_routes = Router::new()
        .route("/api/schools", get(handlers::schools::list))
        .route("/api/schools", post(handlers::schools::create))
        .route("/api/schools/{id}", get(handlers::schools::get))
        .route("/api/schools/{id}", put(handlers::schools::update))
        .route("/api/schools/{id}", delete(handlers::schools::delete))
        .with_state(school_service);

    // Teacher routes
    let teacher_routes = Router::new()
        .route("/api/teachers", get(handlers::teachers::list))
        .route("/api/teachers", post(handlers::teachers::create))
        .route("/api/teachers/{id}", get(handlers::teachers::get))
        .route("/api/teachers/{id}", put(handlers::teachers::update))
        .route("/api/teachers/{id}", delete(handlers::teachers::delete))
        .with_state(teacher_service);

    // Enrollment routes
    let enrollment_routes = Router::new()
        .route("/api/enrollments", get(handlers::enrollments::list))
        .route("/api/enrollments", post(handlers::enrollments::create))
        .route("/api/enrollments/{id}", get(handlers::enrollments::get))
        .route(
            "/api/enrollments/{id}",
            delete(handlers::enrollments::delete),
        )
        .with_state(enrollment_service);

    // Settings routes
    let settings_routes = Router::new()
        .route(
            "/api/settings/offline-mode",
            get(handlers::settings::get_offline_mode),
        )
        .route(
            "/api/settings/offline-mode",
            post(handlers::settings::set_offline_mode),
        )
        .with_state(settings_service);

    // Dashboard routes
    let dashboard_routes = Router::new()
        .route("/api/dashboard/stats", get(handlers::dashboard::get_stats))
        .with_state(db_pool);

    // System monitoring routes
    let system_routes = Router::new()
        .route("/api/status", get(handlers::system::get_status))
        .with_state(state);

    // Combine all routes
    Router::new()
        .merge(health_routes)
        .merge(database_routes)
        .merge(init_routes)
        .merge(school_routes)
        .merge(teacher_routes)
        .merge(enrollment_routes)
        .merge(settings_routes)
        .merge(dashboard_routes)
        .merge(system_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Educar backend"
    );

    // Load configuration
    let app_config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load app config, using defaults");
        AppConfig::default()
    });

    let db_config = DatabaseConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load database config, using defaults");
        DatabaseConfig::default()
    });

    tracing::info!(
        host = %app_config.host,
        port = app_config.port,
        environment = %app_config.environment,
        "Configuration loaded"
    );

    // Create database connection pool
    let db_pool = create_pool(&db_config).await?;

    // Create services
    let school_service = SchoolService::new(db_pool.clone());
    let teacher_service = TeacherService::new(db_pool.clone());
    let enrollment_service = EnrollmentService::new(db_pool.clone());
    let settings_service = SettingsService::new(db_pool.clone());

    // Report the persisted offline-mode flag; absent until first setup
    let offline_mode = settings_service
        .offline_mode()
        .await
        .log("reading offline-mode flag")
        .unwrap_or(false);
    tracing::info!(offline_mode, "Offline mode loaded");

    // Create application state
    let state = AppState::new(db_pool.clone(), app_config.clone());

    // Build the router
    let app = build_router(
        state,
        db_pool,
        school_service,
        teacher_service,
        enrollment_service,
        settings_service,
    );

    // Bind to address
    let addr: SocketAddr = app_config.bind_address().parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "Server listening");

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
