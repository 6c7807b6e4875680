//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use shopper_registry::application::use_cases::shoppers::{
    CreateShopperUseCase, DeleteShopperUseCase, GetShopperByUsernameUseCase, ListShoppersUseCase,
    UpdateShopperUseCase,
};
use shopper_registry::infrastructure::driven_adapters::shopper_repository::PostgresShopperRepository;
use shopper_registry::infrastructure::driving_adapters::api_rest::doc::ApiDoc;
use shopper_registry::infrastructure::driving_adapters::api_rest::handlers::{self, shoppers};
use shopper_registry::infrastructure::driving_adapters::api_rest::AppState;

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

        // Create connection pool
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Create repository
        let shopper_repository = Arc::new(PostgresShopperRepository::new(pool.clone()));

        // Create use cases
        let create_shopper_use_case =
            Arc::new(CreateShopperUseCase::new(shopper_repository.clone()));
        let list_shoppers_use_case = Arc::new(ListShoppersUseCase::new(shopper_repository.clone()));
        let get_shopper_by_username_use_case =
            Arc::new(GetShopperByUsernameUseCase::new(shopper_repository.clone()));
        let update_shopper_use_case =
            Arc::new(UpdateShopperUseCase::new(shopper_repository.clone()));
        let delete_shopper_use_case =
            Arc::new(DeleteShopperUseCase::new(shopper_repository.clone()));

        // Create application state
        let app_state = AppState {
            create_shopper_use_case,
            list_shoppers_use_case,
            get_shopper_by_username_use_case,
            update_shopper_use_case,
            delete_shopper_use_case,
        };

        // Build router with the same surface as the binary
        let router = Router::new()
            .route("/health", get(handlers::health))
            .nest("/shoppers", shoppers::router())
            .merge(SwaggerUi::new("/swagger").url("/swagger/openapi.json", ApiDoc::openapi()))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        Self {
            router,
            pool,
            _container: container,
        }
    }
}

/// Helper struct for creating shopper request bodies
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShopperRequest {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Default for CreateShopperRequest {
    fn default() -> Self {
        Self {
            username: "jdoe".to_string(),
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        }
    }
}

impl CreateShopperRequest {
    pub fn with_username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }
}

/// Helper struct for updating shopper request bodies
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShopperRequest {
    pub full_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Default for UpdateShopperRequest {
    fn default() -> Self {
        Self {
            full_name: "Jane A. Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            street: "2 Elm St".to_string(),
            city: "Shelbyville".to_string(),
            state: "IN".to_string(),
            zip_code: "46176".to_string(),
        }
    }
}

/// Shopper response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct ShopperResponse {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub date_joined: String,
}

/// List response envelope for deserialization
#[derive(Debug, Deserialize)]
pub struct ShoppersListResponse {
    pub shoppers: Vec<ShopperResponse>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
