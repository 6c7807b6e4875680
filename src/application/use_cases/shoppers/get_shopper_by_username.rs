//! Get Shopper By Username Use Case
//!
//! Retrieves a single shopper by username.

use std::sync::Arc;

use crate::domain::gateways::ShopperRepository;
use crate::domain::models::shopper::{Shopper, Username};
use crate::shared::errors::UseCaseError;

/// Use case for getting a shopper by username
pub struct GetShopperByUsernameUseCase {
    shopper_repository: Arc<dyn ShopperRepository>,
}

impl GetShopperByUsernameUseCase {
    /// Create a new GetShopperByUsernameUseCase
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
    pub async fn execute(&self, username: &Username) -> Result<Shopper, UseCaseError> {
        tracing::debug!(username = %username, "Getting shopper by username");

        let shopper = self
            .shopper_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                tracing::warn!(username = %username, "Shopper not found");
                UseCaseError::NotFound {
                    resource: "Shopper".to_string(),
                    username: username.to_string(),
                }
            })?;

        tracing::debug!(username = %username, "Shopper found");
        Ok(shopper)
    }
}
