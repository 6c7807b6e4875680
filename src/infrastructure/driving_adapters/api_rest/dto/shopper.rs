//! Shopper DTOs
//!
//! Data transfer objects for shopper API endpoints.
//!
//! Request DTOs default every missing field to an empty string, mirroring
//! the full-replace write model: what the client sends is exactly what is
//! stored. Unknown keys (such as a client-supplied `dateJoined`) are ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::models::shopper::{CreateShopperData, Shopper, UpdateShopperData};

/// DTO for registering a new shopper
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShopperDto {
    #[validate(length(min = 1, message = "username must not be empty"))]
    #[schema(example = "jdoe")]
    pub username: String,

    #[serde(default)]
    #[schema(example = "Jane Doe")]
    pub full_name: String,

    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "1 Main St")]
    pub street: String,

    #[serde(default)]
    #[schema(example = "Springfield")]
    pub city: String,

    #[serde(default)]
    #[schema(example = "IL")]
    pub state: String,

    #[serde(default)]
    #[schema(example = "62701")]
    pub zip_code: String,
}

impl From<CreateShopperDto> for CreateShopperData {
    fn from(dto: CreateShopperDto) -> Self {
        Self {
            username: dto.username,
            full_name: dto.full_name,
            email: dto.email,
            street: dto.street,
            city: dto.city,
            state: dto.state,
            zip_code: dto.zip_code,
        }
    }
}

/// DTO for full shopper update (PUT)
///
/// Every mutable field is replaced. Omitted fields default to empty strings
/// and clear the stored value; the username and join date cannot be changed.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShopperDto {
    #[serde(default)]
    #[schema(example = "Jane Doe")]
    pub full_name: String,

    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "1 Main St")]
    pub street: String,

    #[serde(default)]
    #[schema(example = "Springfield")]
    pub city: String,

    #[serde(default)]
    #[schema(example = "IL")]
    pub state: String,

    #[serde(default)]
    #[schema(example = "62701")]
    pub zip_code: String,
}

impl From<UpdateShopperDto> for UpdateShopperData {
    fn from(dto: UpdateShopperDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
            street: dto.street,
            city: dto.city,
            state: dto.state,
            zip_code: dto.zip_code,
        }
    }
}

/// Shopper response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopperResponseDto {
    #[schema(example = "jdoe")]
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Server-assigned registration date
    #[schema(example = "2024-05-01")]
    pub date_joined: NaiveDate,
}

impl From<Shopper> for ShopperResponseDto {
    fn from(shopper: Shopper) -> Self {
        Self {
            username: shopper.username().to_string(),
            full_name: shopper.full_name().to_string(),
            email: shopper.email().to_string(),
            street: shopper.street().to_string(),
            city: shopper.city().to_string(),
            state: shopper.state().to_string(),
            zip_code: shopper.zip_code().to_string(),
            date_joined: shopper.date_joined(),
        }
    }
}

impl From<&Shopper> for ShopperResponseDto {
    fn from(shopper: &Shopper) -> Self {
        Self {
            username: shopper.username().to_string(),
            full_name: shopper.full_name().to_string(),
            email: shopper.email().to_string(),
            street: shopper.street().to_string(),
            city: shopper.city().to_string(),
            state: shopper.state().to_string(),
            zip_code: shopper.zip_code().to_string(),
            date_joined: shopper.date_joined(),
        }
    }
}

/// Envelope for the shopper list response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShoppersResponseDto {
    pub shoppers: Vec<ShopperResponseDto>,
}

impl From<Vec<Shopper>> for ShoppersResponseDto {
    fn from(shoppers: Vec<Shopper>) -> Self {
        Self {
            shoppers: shoppers.iter().map(ShopperResponseDto::from).collect(),
        }
    }
}
