//! HTTP API client wrapping `gloo-net` for calls to `/api/restaurantes`.

use gloo_net::http::{Request, Response};
use restohub_domain::id::RestaurantId;
use restohub_domain::restaurant::{NewRestaurant, Restaurant, RestaurantChanges};

use crate::state::LookupError;

const BASE: &str = "/api/restaurantes";

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    Err(ApiError {
        message: format!("HTTP {}", resp.status()),
    })
}

/// Fetch all restaurants.
pub async fn fetch_restaurants() -> Result<Vec<Restaurant>, ApiError> {
    let resp = check_response(Request::get(BASE).send().await?)?;
    let restaurants: Vec<Restaurant> = resp.json().await?;
    Ok(restaurants)
}

/// Fetch a single restaurant by the id typed into the search panel.
pub async fn fetch_restaurant(id: &str) -> Result<Restaurant, LookupError> {
    let network = |err: gloo_net::Error| LookupError::Network(err.to_string());

    let url = format!("{BASE}/{id}");
    let resp = Request::get(&url).send().await.map_err(network)?;
    match resp.status() {
        404 => Err(LookupError::NotFound),
        _ if !resp.ok() => Err(LookupError::Status(resp.status())),
        _ => resp.json().await.map_err(network),
    }
}

/// Create a restaurant.
pub async fn create_restaurant(restaurant: &NewRestaurant) -> Result<(), ApiError> {
    check_response(Request::post(BASE).json(restaurant)?.send().await?)?;
    Ok(())
}

/// Overwrite the fields carried by `changes`.
pub async fn update_restaurant(
    id: RestaurantId,
    changes: &RestaurantChanges,
) -> Result<(), ApiError> {
    let url = format!("{BASE}/{id}");
    check_response(Request::put(&url).json(changes)?.send().await?)?;
    Ok(())
}

/// Delete a restaurant.
pub async fn delete_restaurant(id: RestaurantId) -> Result<(), ApiError> {
    let url = format!("{BASE}/{id}");
    check_response(Request::delete(&url).send().await?)?;
    Ok(())
}
