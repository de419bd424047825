//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod restaurants;

use axum::Router;
use axum::routing::get;

use restohub_app::ports::RestaurantRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<RR>() -> Router<AppState<RR>>
where
    RR: RestaurantRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/restaurantes",
            get(restaurants::list::<RR>).post(restaurants::create::<RR>),
        )
        .route(
            "/restaurantes/{id}",
            get(restaurants::get::<RR>)
                .put(restaurants::update::<RR>)
                .delete(restaurants::delete::<RR>),
        )
}
