//! Shopper Repository Gateway
//!
//! Abstract trait defining the contract for shopper persistence operations.

use async_trait::async_trait;

use crate::domain::models::shopper::{Shopper, Username};
use crate::shared::errors::RepositoryError;

/// Repository trait for Shopper persistence operations
#[async_trait]
pub trait ShopperRepository: Send + Sync {
    /// Find a shopper by username
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Shopper>, RepositoryError>;

    /// Find all shoppers
    async fn find_all(&self) -> Result<Vec<Shopper>, RepositoryError>;

    /// Create a new shopper
    async fn create(&self, shopper: &Shopper) -> Result<Shopper, RepositoryError>;

    /// Update an existing shopper, returning `None` if no row matched
    async fn update(&self, shopper: &Shopper) -> Result<Option<Shopper>, RepositoryError>;

    /// Delete a shopper, returning whether a row was removed
    async fn delete(&self, username: &Username) -> Result<bool, RepositoryError>;
}
