//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration

pub mod config;
pub mod database;
pub mod shopper_repository;

pub use config::AppConfig;
pub use shopper_repository::PostgresShopperRepository;
