//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! served under `/swagger`. It registers every shopper endpoint along with
//! the request, response, and error schemas they reference.

use utoipa::OpenApi;

use crate::infrastructure::driving_adapters::api_rest::dto::shopper::{
    CreateShopperDto, ShopperResponseDto, ShoppersResponseDto, UpdateShopperDto,
};
use crate::shared::errors::ErrorResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopper Registry API",
        description = "HTTP interface for managing shopper profiles."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::infrastructure::driving_adapters::api_rest::handlers::shoppers::create_shopper,
        crate::infrastructure::driving_adapters::api_rest::handlers::shoppers::list_shoppers,
        crate::infrastructure::driving_adapters::api_rest::handlers::shoppers::get_shopper_by_username,
        crate::infrastructure::driving_adapters::api_rest::handlers::shoppers::update_shopper,
        crate::infrastructure::driving_adapters::api_rest::handlers::shoppers::delete_shopper,
    ),
    components(schemas(
        CreateShopperDto,
        UpdateShopperDto,
        ShopperResponseDto,
        ShoppersResponseDto,
        ErrorResponse
    )),
    tags(
        (name = "shoppers", description = "Operations on shopper profiles")
    )
)]
pub struct ApiDoc;
