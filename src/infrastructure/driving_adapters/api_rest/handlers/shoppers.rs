//! Shopper Handlers
//!
//! HTTP handlers for shopper CRUD operations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::shopper::Username;
use crate::infrastructure::driving_adapters::api_rest::dto::shopper::{
    CreateShopperDto, ShopperResponseDto, ShoppersResponseDto, UpdateShopperDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::AppJson;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, ErrorResponse};

/// Create the router for shopper endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_shopper))
        .route("/", get(list_shoppers))
        .route("/{username}", get(get_shopper_by_username))
        .route("/{username}", put(update_shopper))
        .route("/{username}", delete(delete_shopper))
}

/// POST /shoppers - Register a new shopper
///
/// # Responses
///
/// * 201 Created - Shopper created successfully
/// * 400 Bad Request - Malformed body or empty username
/// * 500 Internal Server Error - Storage failure, including duplicate username
#[utoipa::path(
    post,
    path = "/shoppers",
    request_body = CreateShopperDto,
    responses(
        (status = 201, description = "Shopper created", body = ShopperResponseDto),
        (status = 400, description = "Malformed body or empty username", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tags = ["shoppers"],
    operation_id = "createShopper"
)]
#[axum::debug_handler]
pub async fn create_shopper(
    State(state): State<AppState>,
    AppJson(dto): AppJson<CreateShopperDto>,
) -> Result<(StatusCode, Json<ShopperResponseDto>), ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let shopper = state.create_shopper_use_case.execute(dto.into()).await?;

    // Return response
    Ok((StatusCode::CREATED, Json(ShopperResponseDto::from(shopper))))
}

/// GET /shoppers - List every registered shopper
///
/// # Responses
///
/// * 200 OK - Shoppers wrapped in a `shoppers` envelope
/// * 500 Internal Server Error - Storage failure
#[utoipa::path(
    get,
    path = "/shoppers",
    responses(
        (status = 200, description = "All registered shoppers", body = ShoppersResponseDto),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tags = ["shoppers"],
    operation_id = "listShoppers"
)]
#[axum::debug_handler]
pub async fn list_shoppers(
    State(state): State<AppState>,
) -> Result<Json<ShoppersResponseDto>, ApiError> {
    // Execute use case
    let shoppers = state.list_shoppers_use_case.execute().await?;

    // Return response
    Ok(Json(ShoppersResponseDto::from(shoppers)))
}

/// GET /shoppers/:username - Get a shopper by username
///
/// # Responses
///
/// * 200 OK - Shopper found
/// * 404 Not Found - Shopper does not exist
/// * 500 Internal Server Error - Storage failure
#[utoipa::path(
    get,
    path = "/shoppers/{username}",
    params(
        ("username" = String, Path, description = "Username of the shopper")
    ),
    responses(
        (status = 200, description = "Shopper found", body = ShopperResponseDto),
        (status = 404, description = "Shopper does not exist", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tags = ["shoppers"],
    operation_id = "getShopperByUsername"
)]
#[axum::debug_handler]
pub async fn get_shopper_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ShopperResponseDto>, ApiError> {
    let username = Username::new(username);

    // Execute use case
    let shopper = state
        .get_shopper_by_username_use_case
        .execute(&username)
        .await?;

    // Return response
    Ok(Json(ShopperResponseDto::from(shopper)))
}

/// PUT /shoppers/:username - Replace a shopper's profile
///
/// # Responses
///
/// * 200 OK - Shopper updated successfully
/// * 400 Bad Request - Malformed body
/// * 404 Not Found - Shopper does not exist
/// * 500 Internal Server Error - Storage failure
#[utoipa::path(
    put,
    path = "/shoppers/{username}",
    params(
        ("username" = String, Path, description = "Username of the shopper")
    ),
    request_body = UpdateShopperDto,
    responses(
        (status = 200, description = "Shopper updated", body = ShopperResponseDto),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "Shopper does not exist", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tags = ["shoppers"],
    operation_id = "updateShopper"
)]
#[axum::debug_handler]
pub async fn update_shopper(
    State(state): State<AppState>,
    Path(username): Path<String>,
    AppJson(dto): AppJson<UpdateShopperDto>,
) -> Result<Json<ShopperResponseDto>, ApiError> {
    let username = Username::new(username);

    // Execute use case
    let shopper = state
        .update_shopper_use_case
        .execute(&username, dto.into())
        .await?;

    // Return response
    Ok(Json(ShopperResponseDto::from(shopper)))
}

/// DELETE /shoppers/:username - Remove a shopper
///
/// # Responses
///
/// * 204 No Content - Shopper deleted successfully
/// * 404 Not Found - Shopper does not exist
/// * 500 Internal Server Error - Storage failure
#[utoipa::path(
    delete,
    path = "/shoppers/{username}",
    params(
        ("username" = String, Path, description = "Username of the shopper")
    ),
    responses(
        (status = 204, description = "Shopper deleted"),
        (status = 404, description = "Shopper does not exist", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tags = ["shoppers"],
    operation_id = "deleteShopper"
)]
#[axum::debug_handler]
pub async fn delete_shopper(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<StatusCode, ApiError> {
    let username = Username::new(username);

    // Execute use case
    state.delete_shopper_use_case.execute(&username).await?;

    // Return response
    Ok(StatusCode::NO_CONTENT)
}
