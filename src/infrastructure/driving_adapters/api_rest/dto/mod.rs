//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod shopper;

pub use shopper::{CreateShopperDto, ShopperResponseDto, ShoppersResponseDto, UpdateShopperDto};
