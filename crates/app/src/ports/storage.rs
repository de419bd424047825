//! Storage port: repository traits for persistence.

use std::future::Future;

use restohub_domain::error::RestoHubError;
use restohub_domain::id::RestaurantId;
use restohub_domain::restaurant::{NewRestaurant, Restaurant, RestaurantChanges};

/// Repository for persisting and querying [`Restaurant`]s.
///
/// Implementations perform no validation. Each method is a single atomic
/// operation; there is no cross-call locking.
pub trait RestaurantRepository {
    /// Insert a new restaurant and return it with its store-assigned id.
    fn create(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, RestoHubError>> + Send;

    /// Get a restaurant by its identifier.
    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, RestoHubError>> + Send;

    /// Get all restaurants, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, RestoHubError>> + Send;

    /// Overwrite the fields present in `changes` and return the stored record.
    ///
    /// Fails with [`RestoHubError::NotFound`] when `id` does not exist.
    fn update(
        &self,
        id: RestaurantId,
        changes: RestaurantChanges,
    ) -> impl Future<Output = Result<Restaurant, RestoHubError>> + Send;

    /// Delete a restaurant by its identifier.
    ///
    /// Fails with [`RestoHubError::NotFound`] when `id` does not exist.
    fn delete(&self, id: RestaurantId) -> impl Future<Output = Result<(), RestoHubError>> + Send;
}
