//! Shopper Registry API
//!
//! A Rust-based microservice for managing shopper profiles following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
