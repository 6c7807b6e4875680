//! Shopper Domain Model
//!
//! Represents a shopper profile in the registry.

use chrono::NaiveDate;

/// Newtype wrapper for the shopper username providing type safety
///
/// The username is the primary key: client-supplied at creation and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a Username from any string-like value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the underlying string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Data required to create a new Shopper
///
/// The join date is not part of the input; it is stamped by the server
/// when the entity is constructed.
#[derive(Debug, Clone)]
pub struct CreateShopperData {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Replacement values for the mutable fields of an existing Shopper
///
/// Updates are full-replace: every field is overwritten, so a caller that
/// leaves a field empty clears the stored value. The username and join date
/// are not part of the update surface.
#[derive(Debug, Clone, Default)]
pub struct UpdateShopperData {
    pub full_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Shopper domain entity representing a customer profile
#[derive(Debug, Clone)]
pub struct Shopper {
    username: Username,
    full_name: String,
    email: String,
    street: String,
    city: String,
    state: String,
    zip_code: String,
    date_joined: NaiveDate,
}

impl Shopper {
    /// Create a new Shopper from creation data, stamping the join date
    /// with the server's current date
    #[must_use]
    pub fn new(data: CreateShopperData) -> Self {
        Self {
            username: Username::new(data.username),
            full_name: data.full_name,
            email: data.email,
            street: data.street,
            city: data.city,
            state: data.state,
            zip_code: data.zip_code,
            date_joined: chrono::Local::now().date_naive(),
        }
    }

    /// Restore a Shopper from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        username: Username,
        full_name: String,
        email: String,
        street: String,
        city: String,
        state: String,
        zip_code: String,
        date_joined: NaiveDate,
    ) -> Self {
        Self {
            username,
            full_name,
            email,
            street,
            city,
            state,
            zip_code,
            date_joined,
        }
    }

    /// Replace every mutable field from the given data, returning a new
    /// instance with the username and join date untouched
    #[must_use]
    pub fn with_profile(self, data: UpdateShopperData) -> Self {
        Self {
            username: self.username,
            full_name: data.full_name,
            email: data.email,
            street: data.street,
            city: data.city,
            state: data.state,
            zip_code: data.zip_code,
            date_joined: self.date_joined,
        }
    }

    // Getters

    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    #[must_use]
    pub fn date_joined(&self) -> NaiveDate {
        self.date_joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_shopper_data() -> CreateShopperData {
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

    #[test]
    fn test_username_display() {
        let username = Username::new("jdoe");
        assert_eq!(username.to_string(), "jdoe");
        assert_eq!(username.as_str(), "jdoe");
    }

    #[test]
    fn test_username_from_str() {
        let username = Username::from("jdoe");
        assert_eq!(username, Username::new("jdoe".to_string()));
    }

    #[test]
    fn test_shopper_new_copies_fields() {
        let data = create_test_shopper_data();
        let shopper = Shopper::new(data.clone());

        assert_eq!(shopper.username().as_str(), data.username);
        assert_eq!(shopper.full_name(), data.full_name);
        assert_eq!(shopper.email(), data.email);
        assert_eq!(shopper.street(), data.street);
        assert_eq!(shopper.city(), data.city);
        assert_eq!(shopper.state(), data.state);
        assert_eq!(shopper.zip_code(), data.zip_code);
    }

    #[test]
    fn test_shopper_new_stamps_current_date() {
        let shopper = Shopper::new(create_test_shopper_data());
        assert_eq!(shopper.date_joined(), chrono::Local::now().date_naive());
    }

    #[test]
    fn test_with_profile_replaces_all_mutable_fields() {
        let shopper = Shopper::new(create_test_shopper_data());
        let original_username = shopper.username().clone();
        let original_date = shopper.date_joined();

        let updated = shopper.with_profile(UpdateShopperData {
            full_name: "Jane A. Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            street: "2 Elm St".to_string(),
            city: "Shelbyville".to_string(),
            state: "IN".to_string(),
            zip_code: "46176".to_string(),
        });

        assert_eq!(updated.username(), &original_username);
        assert_eq!(updated.date_joined(), original_date);
        assert_eq!(updated.full_name(), "Jane A. Doe");
        assert_eq!(updated.email(), "jane.doe@example.com");
        assert_eq!(updated.street(), "2 Elm St");
        assert_eq!(updated.city(), "Shelbyville");
        assert_eq!(updated.state(), "IN");
        assert_eq!(updated.zip_code(), "46176");
    }

    #[test]
    fn test_with_profile_clears_omitted_fields() {
        let shopper = Shopper::new(create_test_shopper_data());

        // Full-replace semantics: empty replacement values wipe the field.
        let updated = shopper.with_profile(UpdateShopperData {
            full_name: "Jane Doe".to_string(),
            ..UpdateShopperData::default()
        });

        assert_eq!(updated.full_name(), "Jane Doe");
        assert_eq!(updated.email(), "");
        assert_eq!(updated.street(), "");
    }

    #[test]
    fn test_restore_round_trip() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
        let shopper = Shopper::restore(
            Username::new("jdoe"),
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
            "1 Main St".to_string(),
            "Springfield".to_string(),
            "IL".to_string(),
            "62701".to_string(),
            date,
        );

        assert_eq!(shopper.username().as_str(), "jdoe");
        assert_eq!(shopper.date_joined(), date);
    }
}
