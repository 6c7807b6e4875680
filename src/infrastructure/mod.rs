//! Infrastructure Layer
//!
//! External concerns: the REST API on the driving side; configuration, the
//! connection pool, and the Postgres repository on the driven side.

pub mod driven_adapters;
pub mod driving_adapters;
