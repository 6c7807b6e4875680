//! Shopper Repository Adapters
//!
//! Concrete persistence implementations of the ShopperRepository gateway.

pub mod postgres;

pub use postgres::PostgresShopperRepository;
