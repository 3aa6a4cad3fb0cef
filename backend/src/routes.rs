use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{admin, blog, calendar, contact, donations, events, health};
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))

        // Public site
        .route("/events", get(events::list_events))
        .route("/calendar", get(calendar::get_calendar))
        .route("/blog", get(blog::list_posts))
        .route("/donations", post(donations::create_donation))
        .route("/contact", post(contact::submit_contact))

        // Admin session
        .route("/admin/login", post(admin::login))
        .route("/admin/logout", post(admin::logout))

        // Admin panel
        .route("/admin/donations", get(donations::list_donations))
        .route("/admin/events", get(admin::list_events).post(admin::create_event))
        .route("/admin/events/:id", put(admin::update_event).delete(admin::delete_event))
        .route("/admin/events/:id/toggle", post(admin::toggle_event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::db::create_pool;

    const PASSWORD: &str = "let-me-in";

    // The pool never connects; every request below is answered before a
    // query would run.
    fn test_state() -> AppState {
        let config = AppConfig {
            database_url: "postgres://localhost:1/sproutsphere_test".to_string(),
            port: 0,
            admin_password: PASSWORD.to_string(),
            admin_session_hours: 1,
            cors_allowed_origins: None,
            frontend_dir: "frontend/dist".to_string(),
            utc_offset_minutes: 120,
        };
        let pool = create_pool(&config.database_url).unwrap();
        AppState::new(pool, config)
    }

    fn app(state: AppState) -> Router {
        Router::new().nest("/api", api_routes()).with_state(state)
    }

    fn json_request(method: Method, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn login(state: &AppState) -> String {
        let response = app(state.clone())
            .oneshot(json_request(
                Method::POST,
                "/api/admin/login",
                json!({ "password": PASSWORD }),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(test_state())
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let response = app(test_state())
            .oneshot(json_request(
                Method::POST,
                "/api/admin/login",
                json!({ "password": "guess" }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Incorrect password");
    }

    #[tokio::test]
    async fn test_login_then_logout_revokes_token() {
        let state = test_state();
        let token = login(&state).await;

        let response = app(state.clone())
            .oneshot(json_request(Method::POST, "/api/admin/logout", json!({}), Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app(state)
            .oneshot(json_request(Method::POST, "/api/admin/logout", json!({}), Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_routes_require_session() {
        let state = test_state();
        let cases = [
            (Method::GET, "/api/admin/donations".to_string()),
            (Method::GET, "/api/admin/events".to_string()),
            (Method::POST, "/api/admin/events".to_string()),
            (Method::PUT, format!("/api/admin/events/{}", uuid::Uuid::new_v4())),
            (Method::DELETE, format!("/api/admin/events/{}", uuid::Uuid::new_v4())),
            (Method::POST, format!("/api/admin/events/{}/toggle", uuid::Uuid::new_v4())),
        ];

        for (method, uri) in cases {
            let response = app(state.clone())
                .oneshot(json_request(method.clone(), &uri, json!({}), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        }

        let response = app(state)
            .oneshot(json_request(
                Method::GET,
                "/api/admin/events",
                json!({}),
                Some(&uuid::Uuid::new_v4().to_string()),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_calendar_rejects_malformed_month() {
        let response = app(test_state())
            .oneshot(
                Request::get("/api/calendar?month=November")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_donation_amount_must_be_positive() {
        for amount in [json!(0), json!(-20.5)] {
            let response = app(test_state())
                .oneshot(json_request(
                    Method::POST,
                    "/api/donations",
                    json!({ "amount": amount, "frequency": "monthly" }),
                    None,
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_contact_rejects_invalid_email() {
        let response = app(test_state())
            .oneshot(json_request(
                Method::POST,
                "/api/contact",
                json!({ "name": "Sipho", "email": "sipho-at-example", "message": "Hi" }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Validation failed");
    }

    #[tokio::test]
    async fn test_event_form_is_validated_before_saving() {
        let state = test_state();
        let token = login(&state).await;

        let empty_title = json!({
            "title": "",
            "start_date": "2025-11-10T10:00",
            "end_date": "2025-11-10T12:00",
        });
        let response = app(state.clone())
            .oneshot(json_request(Method::POST, "/api/admin/events", empty_title, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bad_date = json!({
            "title": "Science Fair",
            "start_date": "soon",
            "end_date": "2025-11-10T12:00",
        });
        let response = app(state)
            .oneshot(json_request(Method::POST, "/api/admin/events", bad_date, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
