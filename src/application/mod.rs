//! Application Layer
//!
//! One use case per shopper operation. Use cases depend on the repository
//! gateway trait, never on a concrete adapter.

pub mod use_cases;
