//! List Shoppers Use Case
//!
//! Retrieves every shopper in the registry.

use std::sync::Arc;

use crate::domain::gateways::ShopperRepository;
use crate::domain::models::shopper::Shopper;
use crate::shared::errors::UseCaseError;

/// Use case for listing all shoppers
pub struct ListShoppersUseCase {
    shopper_repository: Arc<dyn ShopperRepository>,
}

impl ListShoppersUseCase {
    /// Create a new ListShoppersUseCase
    #[must_use]
    pub fn new(shopper_repository: Arc<dyn ShopperRepository>) -> Self {
        Self { shopper_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Shopper>, UseCaseError> {
        tracing::debug!("Getting all shoppers");

        let shoppers = self.shopper_repository.find_all().await?;

        tracing::debug!(count = shoppers.len(), "Found shoppers");
        Ok(shoppers)
    }
}
