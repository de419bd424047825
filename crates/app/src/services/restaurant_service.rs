//! Restaurant service: use-cases for managing restaurant records.

use restohub_domain::error::RestoHubError;
use restohub_domain::id::RestaurantId;
use restohub_domain::restaurant::{NewRestaurant, Restaurant, RestaurantChanges};

use crate::ports::RestaurantRepository;

/// Application service for restaurant CRUD operations.
///
/// Fields are stored exactly as received: empty strings are accepted, the
/// required-field check belongs to the admin page.
pub struct RestaurantService<R> {
    repo: R,
}

impl<R: RestaurantRepository> RestaurantService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new restaurant.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, restaurant), fields(restaurant_name = %restaurant.name))]
    pub async fn create_restaurant(
        &self,
        restaurant: NewRestaurant,
    ) -> Result<Restaurant, RestoHubError> {
        let created = self.repo.create(restaurant).await?;
        tracing::info!(id = %created.id, "restaurant created");
        Ok(created)
    }

    /// Look up a restaurant by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RestoHubError::NotFound`] when no restaurant with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_restaurant(&self, id: RestaurantId) -> Result<Restaurant, RestoHubError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| Restaurant::not_found(id).into())
    }

    /// List all restaurants in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, RestoHubError> {
        self.repo.get_all().await
    }

    /// Overwrite the fields carried by `changes`, keeping the others.
    ///
    /// # Errors
    ///
    /// Returns [`RestoHubError::NotFound`] if the restaurant does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        changes: RestaurantChanges,
    ) -> Result<Restaurant, RestoHubError> {
        if changes.is_empty() {
            tracing::debug!("no fields to change");
            return self.get_restaurant(id).await;
        }
        let updated = self.repo.update(id, changes).await?;
        tracing::info!("restaurant updated");
        Ok(updated)
    }

    /// Delete a restaurant by id.
    ///
    /// # Errors
    ///
    /// Returns [`RestoHubError::NotFound`] if the restaurant does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<(), RestoHubError> {
        self.repo.delete(id).await?;
        tracing::info!("restaurant deleted");
        Ok(())
    }
}
