//! Create Shopper Use Case
//!
//! Registers a new shopper in the registry.

use std::sync::Arc;

use crate::domain::gateways::ShopperRepository;
use crate::domain::models::shopper::{CreateShopperData, Shopper};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new shopper
pub struct CreateShopperUseCase {
    shopper_repository: Arc<dyn ShopperRepository>,
}

impl CreateShopperUseCase {
    /// Create a new CreateShopperUseCase
    #[must_use]
    pub fn new(shopper_repository: Arc<dyn ShopperRepository>) -> Self {
        Self { shopper_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error,
    /// including an insert for a username that already exists.
    pub async fn execute(&self, data: CreateShopperData) -> Result<Shopper, UseCaseError> {
        tracing::info!(username = %data.username, "Creating new shopper");

        // The join date is stamped here, never taken from the caller.
        let shopper = Shopper::new(data);
        let created = self.shopper_repository.create(&shopper).await?;

        tracing::info!(username = %created.username(), "Shopper created successfully");

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::shopper::Username;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockShopperRepository {
        create_result: Mutex<Option<Result<Shopper, RepositoryError>>>,
    }

    impl MockShopperRepository {
        fn new() -> Self {
            Self {
                create_result: Mutex::new(None),
            }
        }

        fn with_create(self, result: Result<Shopper, RepositoryError>) -> Self {
            *self.create_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl ShopperRepository for MockShopperRepository {
        async fn find_by_username(
            &self,
            _username: &Username,
        ) -> Result<Option<Shopper>, RepositoryError> {
            Ok(None)
        }

        async fn find_all(&self) -> Result<Vec<Shopper>, RepositoryError> {
            Ok(vec![])
        }

        async fn create(&self, shopper: &Shopper) -> Result<Shopper, RepositoryError> {
            self.create_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(shopper.clone()))
        }

        async fn update(&self, _shopper: &Shopper) -> Result<Option<Shopper>, RepositoryError> {
            Ok(None)
        }

        async fn delete(&self, _username: &Username) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    fn create_test_data() -> CreateShopperData {
        CreateShopperData {
            username: "jdoe".to_string(),
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_shopper_with_server_stamped_join_date() {
        let repo = Arc::new(MockShopperRepository::new());

        let use_case = CreateShopperUseCase::new(repo);
        let result = use_case.execute(create_test_data()).await;

        assert!(result.is_ok());
        let shopper = result.unwrap();
        assert_eq!(shopper.username().as_str(), "jdoe");
        assert_eq!(shopper.date_joined(), chrono::Local::now().date_naive());
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let repo = Arc::new(MockShopperRepository::new().with_create(Err(
            RepositoryError::Database(sqlx::Error::PoolTimedOut),
        )));

        let use_case = CreateShopperUseCase::new(repo);
        let result = use_case.execute(create_test_data()).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
