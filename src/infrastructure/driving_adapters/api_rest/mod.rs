//! REST API Module
//!
//! Contains HTTP handlers, DTOs, extractors, and OpenAPI documentation
//! for the REST API.

pub mod doc;
pub mod dto;
pub mod extract;
pub mod handlers;

use std::sync::Arc;

use crate::application::use_cases::shoppers::{
    CreateShopperUseCase, DeleteShopperUseCase, GetShopperByUsernameUseCase, ListShoppersUseCase,
    UpdateShopperUseCase,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub create_shopper_use_case: Arc<CreateShopperUseCase>,
    pub list_shoppers_use_case: Arc<ListShoppersUseCase>,
    pub get_shopper_by_username_use_case: Arc<GetShopperByUsernameUseCase>,
    pub update_shopper_use_case: Arc<UpdateShopperUseCase>,
    pub delete_shopper_use_case: Arc<DeleteShopperUseCase>,
}
