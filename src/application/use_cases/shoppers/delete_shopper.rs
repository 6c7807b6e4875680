//! Delete Shopper Use Case
//!
//! Permanently removes a shopper from the registry.

use std::sync::Arc;

use crate::domain::gateways::ShopperRepository;
use crate::domain::models::shopper::Username;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a shopper
pub struct DeleteShopperUseCase {
    shopper_repository: Arc<dyn ShopperRepository>,
}

impl DeleteShopperUseCase {
    /// Create a new DeleteShopperUseCase
    #[must_use]
    pub fn new(shopper_repository: Arc<dyn ShopperRepository>) -> Self {
        Self { shopper_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the shopper doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, username: &Username) -> Result<(), UseCaseError> {
        tracing::info!(username = %username, "Deleting shopper");

        let deleted = self.shopper_repository.delete(username).await?;

        if !deleted {
            tracing::warn!(username = %username, "Shopper not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Shopper".to_string(),
                username: username.to_string(),
            });
        }

        tracing::info!(username = %username, "Shopper deleted successfully");
        Ok(())
    }
}
