//! JSON REST handlers for restaurants.
//!
//! No field validation happens here: empty strings are stored as sent, and
//! fields omitted on create are stored as empty strings.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use restohub_app::ports::RestaurantRepository;
use restohub_domain::error::{NotFoundError, RestoHubError};
use restohub_domain::id::RestaurantId;
use restohub_domain::restaurant::{
    ADDRESS_FIELD, NAME_FIELD, NewRestaurant, PHONE_FIELD, Restaurant, RestaurantChanges,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a restaurant. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRestaurantRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
}

impl CreateRestaurantRequest {
    /// Wire names of the fields the client left out.
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            (NAME_FIELD, self.name.is_none()),
            (ADDRESS_FIELD, self.address.is_none()),
            (PHONE_FIELD, self.phone.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect()
    }

    fn into_new_restaurant(self) -> NewRestaurant {
        NewRestaurant::new(
            self.name.unwrap_or_default(),
            self.address.unwrap_or_default(),
            self.phone.unwrap_or_default(),
        )
    }
}

/// Body of a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedBody {
    pub message: &'static str,
    pub id: RestaurantId,
}

/// Body of a successful update or delete.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Restaurant>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Restaurant>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreatedBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// A path segment that is not an integer names a record that cannot exist.
fn parse_id(raw: &str) -> Result<RestaurantId, ApiError> {
    RestaurantId::from_str(raw).map_err(|_| {
        ApiError::from(RestoHubError::NotFound(NotFoundError {
            entity: Restaurant::KIND,
            id: raw.to_string(),
        }))
    })
}

/// `GET /api/restaurantes`
pub async fn list<RR>(State(state): State<AppState<RR>>) -> Result<ListResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
{
    let restaurants = state.restaurant_service.list_restaurants().await?;
    Ok(ListResponse::Ok(Json(restaurants)))
}

/// `GET /api/restaurantes/:id`
pub async fn get<RR>(
    State(state): State<AppState<RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let restaurant = state.restaurant_service.get_restaurant(id).await?;
    Ok(GetResponse::Ok(Json(restaurant)))
}

/// `POST /api/restaurantes`
pub async fn create<RR>(
    State(state): State<AppState<RR>>,
    Json(req): Json<CreateRestaurantRequest>,
) -> Result<CreateResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
{
    let missing = req.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(?missing, "create request omitted fields, storing empty strings");
    }

    let created = state
        .restaurant_service
        .create_restaurant(req.into_new_restaurant())
        .await?;
    Ok(CreateResponse::Created(Json(CreatedBody {
        message: "Restaurante creado",
        id: created.id,
    })))
}

/// `PUT /api/restaurantes/:id`
pub async fn update<RR>(
    State(state): State<AppState<RR>>,
    Path(id): Path<String>,
    Json(changes): Json<RestaurantChanges>,
) -> Result<UpdateResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state
        .restaurant_service
        .update_restaurant(id, changes)
        .await?;
    Ok(UpdateResponse::Ok(Json(MessageBody {
        message: "Restaurante actualizado",
    })))
}

/// `DELETE /api/restaurantes/:id`
pub async fn delete<RR>(
    State(state): State<AppState<RR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.restaurant_service.delete_restaurant(id).await?;
    Ok(DeleteResponse::Ok(Json(MessageBody {
        message: "Restaurante eliminado",
    })))
}
