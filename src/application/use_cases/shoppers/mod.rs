//! Shopper Use Cases
//!
//! Business logic for managing shopper profiles.

mod create_shopper;
mod delete_shopper;
mod get_shopper_by_username;
mod list_shoppers;
mod update_shopper;

pub use create_shopper::CreateShopperUseCase;
pub use delete_shopper::DeleteShopperUseCase;
pub use get_shopper_by_username::GetShopperByUsernameUseCase;
pub use list_shoppers::ListShoppersUseCase;
pub use update_shopper::UpdateShopperUseCase;
