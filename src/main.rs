//! Shopper Registry API - Main Entry Point

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use shopper_registry::application::use_cases::shoppers::{
    CreateShopperUseCase, DeleteShopperUseCase, GetShopperByUsernameUseCase, ListShoppersUseCase,
    UpdateShopperUseCase,
};
use shopper_registry::infrastructure::driven_adapters::config::AppConfig;
use shopper_registry::infrastructure::driven_adapters::database;
use shopper_registry::infrastructure::driven_adapters::shopper_repository::PostgresShopperRepository;
use shopper_registry::infrastructure::driving_adapters::api_rest::doc::ApiDoc;
use shopper_registry::infrastructure::driving_adapters::api_rest::handlers::{self, shoppers};
use shopper_registry::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the optional env file before anything reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopper_registry=debug,tower_http=debug".into());
    let use_json = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json");
    let json_layer = use_json.then(|| tracing_subscriber::fmt::layer().json());
    let text_layer = (!use_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repository
    let shopper_repository = Arc::new(PostgresShopperRepository::new(pool));

    // Create use cases
    let create_shopper_use_case = Arc::new(CreateShopperUseCase::new(shopper_repository.clone()));
    let list_shoppers_use_case = Arc::new(ListShoppersUseCase::new(shopper_repository.clone()));
    let get_shopper_by_username_use_case =
        Arc::new(GetShopperByUsernameUseCase::new(shopper_repository.clone()));
    let update_shopper_use_case = Arc::new(UpdateShopperUseCase::new(shopper_repository.clone()));
    let delete_shopper_use_case = Arc::new(DeleteShopperUseCase::new(shopper_repository.clone()));

    // Create application state
    let app_state = AppState {
        create_shopper_use_case,
        list_shoppers_use_case,
        get_shopper_by_username_use_case,
        update_shopper_use_case,
        delete_shopper_use_case,
    };

    // Build router
    let app = Router::new()
        .route("/health", get(handlers::health))
        .nest("/shoppers", shoppers::router())
        .merge(SwaggerUi::new("/swagger").url("/swagger/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server_task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
    });

    // Serve until a shutdown signal arrives, then give in-flight requests a
    // bounded window to drain before exiting.
    tokio::select! {
        result = &mut server_task => {
            result??;
        }
        () = shutdown_signal() => {
            let _ = shutdown_tx.send(());
            let drain_window = Duration::from_secs(config.server.shutdown_timeout_secs);
            match tokio::time::timeout(drain_window, server_task).await {
                Ok(result) => {
                    result??;
                    tracing::info!("Server shut down cleanly");
                }
                Err(_) => {
                    tracing::warn!(
                        timeout_secs = config.server.shutdown_timeout_secs,
                        "Graceful shutdown timed out, exiting"
                    );
                }
            }
        }
    }

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
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
