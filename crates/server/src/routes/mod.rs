//! Route definitions for the snippet service.
//!
//! ## Routes
//!
//! - `GET /` - Latest snippets
//! - `GET /health` - Health check (JSON)
//! - `GET /snippet/create` - New snippet form
//! - `POST /snippet/create` - Create a snippet
//! - `GET /snippet/{id}` - View a snippet
//! - `GET /static/*` - Static assets

mod health;
mod home;
mod snippet;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the complete application router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(home::home_page))
        .route("/health", get(health::health_check))
        .route(
            "/snippet/create",
            get(snippet::create_form).post(snippet::create_submit),
        )
        .route("/snippet/{id}", get(snippet::view))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use snipbin_core::{AppConfig, SnippetDb};
    use tower::ServiceExt;

    async fn test_app() -> (Router, SnippetDb) {
        let db = SnippetDb::open_in_memory().await.unwrap();
        let app = router(AppState::new(db.clone(), AppConfig::default()));
        (app, db)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn home_empty_store() {
        let (app, _db) = test_app().await;
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("nothing to see here"));
    }

    #[tokio::test]
    async fn home_lists_latest() {
        let (app, db) = test_app().await;
        db.insert("First post", "body", 7).await.unwrap();
        db.insert("Second post", "body", 7).await.unwrap();

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        // Newest first.
        let first = body.find("Second post").unwrap();
        let second = body.find("First post").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn view_existing_snippet() {
        let (app, db) = test_app().await;
        let id = db.insert("Title", "Body text", 7).await.unwrap();

        let response = app
            .oneshot(Request::get(format!("/snippet/{id}")).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Title"));
        assert!(body.contains("Body text"));
    }

    #[tokio::test]
    async fn view_missing_snippet_is_404() {
        let (app, _db) = test_app().await;
        let response = app
            .oneshot(Request::get("/snippet/999999").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn view_non_numeric_id_is_404() {
        let (app, _db) = test_app().await;
        let response = app
            .oneshot(Request::get("/snippet/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_form_renders() {
        let (app, _db) = test_app().await;
        let response = app
            .oneshot(Request::get("/snippet/create").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("name=\"title\""));
        assert!(body.contains("One week"));
    }

    #[tokio::test]
    async fn create_valid_redirects_to_snippet() {
        let (app, db) = test_app().await;
        let response = app
            .oneshot(
                Request::post("/snippet/create")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("title=Hello&content=World&expires=7"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
        assert!(location.starts_with("/snippet/"));

        let id: i64 = location.rsplit('/').next().unwrap().parse().unwrap();
        let snippet = db.get(id).await.unwrap();
        assert_eq!(snippet.title, "Hello");
        assert_eq!(snippet.content, "World");
    }

    #[tokio::test]
    async fn create_blank_title_rerenders_with_errors() {
        let (app, db) = test_app().await;
        let response = app
            .oneshot(
                Request::post("/snippet/create")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("title=&content=World&expires=7"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(response).await;
        assert!(body.contains("This field cannot be blank"));
        // The previously entered content is preserved in the re-rendered form.
        assert!(body.contains("World"));
        // Nothing was persisted.
        assert!(db.latest().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_bad_expiry_rerenders_with_errors() {
        let (app, _db) = test_app().await;
        let response = app
            .oneshot(
                Request::post("/snippet/create")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("title=Hello&content=World&expires=30"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(response).await;
        assert!(body.contains("This field must equal 1, 7 or 365"));
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (app, _db) = test_app().await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("\"status\":\"ok\""));
    }
}
