//! Shared application state for axum handlers.

use std::sync::Arc;

use restohub_app::ports::RestaurantRepository;
use restohub_app::services::restaurant_service::RestaurantService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` and only the `Arc` wrapper is cloned.
pub struct AppState<RR> {
    /// Restaurant CRUD service.
    pub restaurant_service: Arc<RestaurantService<RR>>,
}

impl<RR> Clone for AppState<RR> {
    fn clone(&self) -> Self {
        Self {
            restaurant_service: Arc::clone(&self.restaurant_service),
        }
    }
}

impl<RR> AppState<RR>
where
    RR: RestaurantRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(restaurant_service: RestaurantService<RR>) -> Self {
        Self {
            restaurant_service: Arc::new(restaurant_service),
        }
    }
}
