//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod shopper;

pub use shopper::{CreateShopperData, Shopper, UpdateShopperData, Username};
