//! Update Shopper Use Case
//!
//! Replaces the profile of an existing shopper. The username and join date
//! are never changed by an update.

use std::sync::Arc;

use crate::domain::gateways::ShopperRepository;
use crate::domain::models::shopper::{Shopper, UpdateShopperData, Username};
use crate::shared::errors::UseCaseError;

/// Use case for full-replace shopper updates
pub struct UpdateShopperUseCase {
    shopper_repository: Arc<dyn ShopperRepository>,
}

impl UpdateShopperUseCase {
    /// Create a new UpdateShopperUseCase
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
    pub async fn execute(
        &self,
        username: &Username,
        data: UpdateShopperData,
    ) -> Result<Shopper, UseCaseError> {
        tracing::info!(username = %username, "Updating shopper");

        // Find existing shopper
        let existing = self
            .shopper_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                tracing::warn!(username = %username, "Shopper not found for update");
                UseCaseError::NotFound {
                    resource: "Shopper".to_string(),
                    username: username.to_string(),
                }
            })?;

        // Replace every mutable field, keeping username and join date
        let updated = existing.with_profile(data);

        // Save and return
        let result = self
            .shopper_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Shopper".to_string(),
                username: username.to_string(),
            })?;

        tracing::info!(username = %username, "Shopper updated successfully");
        Ok(result)
    }
}
