//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use restohub_app::ports::RestaurantRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and the admin page served from
/// `dashboard_dir` at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<RR>(state: AppState<RR>, dashboard_dir: &Path) -> Router
where
    RR: RestaurantRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes(dashboard_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use restohub_app::services::restaurant_service::RestaurantService;
    use restohub_domain::error::RestoHubError;
    use restohub_domain::id::RestaurantId;
    use restohub_domain::restaurant::{NewRestaurant, Restaurant, RestaurantChanges};
    use std::path::PathBuf;
    use tower::ServiceExt;

    /// Knows exactly one restaurant, id 1; every storage call succeeds.
    struct StubRestaurantRepo;

    fn bar_paco() -> Restaurant {
        NewRestaurant::new("Bar Paco", "Calle Mayor 1", "123456789").with_id(RestaurantId::new(1))
    }

    impl RestaurantRepository for StubRestaurantRepo {
        async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant, RestoHubError> {
            Ok(restaurant.with_id(RestaurantId::new(1)))
        }
        async fn get_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>, RestoHubError> {
            Ok((id == RestaurantId::new(1)).then(bar_paco))
        }
        async fn get_all(&self) -> Result<Vec<Restaurant>, RestoHubError> {
            Ok(vec![bar_paco()])
        }
        async fn update(
            &self,
            id: RestaurantId,
            changes: RestaurantChanges,
        ) -> Result<Restaurant, RestoHubError> {
            let mut existing = self
                .get_by_id(id)
                .await?
                .ok_or_else(|| RestoHubError::from(Restaurant::not_found(id)))?;
            changes.apply(&mut existing);
            Ok(existing)
        }
        async fn delete(&self, id: RestaurantId) -> Result<(), RestoHubError> {
            if id == RestaurantId::new(1) {
                Ok(())
            } else {
                Err(Restaurant::not_found(id).into())
            }
        }
    }

    /// Fails every call with a storage error.
    struct BrokenRestaurantRepo;

    fn broken() -> RestoHubError {
        RestoHubError::Storage("disk on fire".into())
    }

    impl RestaurantRepository for BrokenRestaurantRepo {
        async fn create(&self, _restaurant: NewRestaurant) -> Result<Restaurant, RestoHubError> {
            Err(broken())
        }
        async fn get_by_id(&self, _id: RestaurantId) -> Result<Option<Restaurant>, RestoHubError> {
            Err(broken())
        }
        async fn get_all(&self) -> Result<Vec<Restaurant>, RestoHubError> {
            Err(broken())
        }
        async fn update(
            &self,
            _id: RestaurantId,
            _changes: RestaurantChanges,
        ) -> Result<Restaurant, RestoHubError> {
            Err(broken())
        }
        async fn delete(&self, _id: RestaurantId) -> Result<(), RestoHubError> {
            Err(broken())
        }
    }

    fn dashboard_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dashboard")
    }

    fn app() -> Router {
        build(
            AppState::new(RestaurantService::new(StubRestaurantRepo)),
            &dashboard_dir(),
        )
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn with_json(method: &str, uri: &str, json: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_restaurants_with_wire_field_names() {
        let (status, body) = send(app(), get("/api/restaurantes")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!([{
                "id": 1,
                "nombre": "Bar Paco",
                "direccion": "Calle Mayor 1",
                "telefono": "123456789",
            }])
        );
    }

    #[tokio::test]
    async fn should_return_not_found_body_when_restaurant_missing() {
        let (status, body) = send(app(), get("/api/restaurantes/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            serde_json::json!({"error": "Restaurante no encontrado"})
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_id_is_not_an_integer() {
        let (status, body) = send(app(), get("/api/restaurantes/abc")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Restaurante no encontrado");
    }

    #[tokio::test]
    async fn should_answer_created_with_message_and_id() {
        let (status, body) = send(
            app(),
            with_json(
                "POST",
                "/api/restaurantes",
                r#"{"nombre":"Bar Paco","direccion":"Calle Mayor 1","telefono":"123456789"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            serde_json::json!({"message": "Restaurante creado", "id": 1})
        );
    }

    #[tokio::test]
    async fn should_accept_create_without_fields() {
        let (status, _) = send(app(), with_json("POST", "/api/restaurantes", "{}")).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn should_answer_update_with_message() {
        let (status, body) = send(
            app(),
            with_json("PUT", "/api/restaurantes/1", r#"{"telefono":"000"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({"message": "Restaurante actualizado"})
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_restaurant() {
        let (status, _) = send(
            app(),
            with_json("PUT", "/api/restaurantes/2", r#"{"nombre":"X"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_answer_delete_with_message() {
        let request = Request::builder()
            .method("DELETE")
            .uri("/api/restaurantes/1")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"message": "Restaurante eliminado"}));
    }

    #[tokio::test]
    async fn should_hide_storage_details_behind_internal_error() {
        let app = build(
            AppState::new(RestaurantService::new(BrokenRestaurantRepo)),
            &dashboard_dir(),
        );
        let (status, body) = send(app, get("/api/restaurantes")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "internal server error"}));
    }

    #[tokio::test]
    async fn should_serve_admin_page_markup_at_root() {
        let response = app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let expected = std::fs::read(dashboard_dir().join("index.html")).unwrap();
        assert_eq!(bytes.to_vec(), expected);
    }

    #[tokio::test]
    async fn should_answer_root_in_full_despite_conditional_headers() {
        let request = Request::builder()
            .uri("/")
            .header("if-modified-since", "Fri, 16 Oct 2099 00:00:00 GMT")
            .header("range", "bytes=0-9")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("last-modified").is_none());
        assert!(response.headers().get("accept-ranges").is_none());

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let expected = std::fs::read(dashboard_dir().join("index.html")).unwrap();
        assert_eq!(bytes.to_vec(), expected);
    }

    #[tokio::test]
    async fn should_return_not_found_when_admin_page_missing() {
        let app = build(
            AppState::new(RestaurantService::new(StubRestaurantRepo)),
            &dashboard_dir().join("absent"),
        );
        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_serve_bundle_assets_from_dashboard_dir() {
        let response = app().oneshot(get("/restohub-dashboard.js")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_asset() {
        let response = app().oneshot(get("/missing.wasm")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
