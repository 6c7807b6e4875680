//! Driving Adapters
//!
//! Entry points that drive the application. A single REST API with its
//! handlers, DTOs, extractors, and OpenAPI document.

pub mod api_rest;
