//! Axum router assembly.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use userhub_app::ports::UserStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the root banner at `/`, nests the JSON API under `/api`, and answers
/// every other path with a plain-text `404`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: UserStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "Running API v1\n"
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Asset not found\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use userhub_app::ports::UserConnection;
    use userhub_app::services::user_repository::UserRepository;
    use userhub_domain::error::{NotFoundError, UserHubError};
    use userhub_domain::id::UserId;
    use userhub_domain::user::User;

    #[derive(Clone, Copy)]
    enum Mode {
        Empty,
        Unavailable,
    }

    struct StubStore(Mode);
    struct StubConnection;

    impl UserStore for StubStore {
        type Connection = StubConnection;

        async fn open(&self) -> Result<StubConnection, UserHubError> {
            match self.0 {
                Mode::Empty => Ok(StubConnection),
                Mode::Unavailable => Err(UserHubError::StoreUnavailable(Box::new(
                    std::io::Error::other("locked"),
                ))),
            }
        }
    }

    impl UserConnection for StubConnection {
        async fn list_all(&mut self) -> Result<Vec<User>, UserHubError> {
            Ok(vec![])
        }
        async fn find_by_id(&mut self, id: UserId) -> Result<User, UserHubError> {
            Err(NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into())
        }
        async fn upsert(&mut self, _user: &User) -> Result<(), UserHubError> {
            Ok(())
        }
        async fn delete_record(&mut self, user: &User) -> Result<(), UserHubError> {
            Err(NotFoundError {
                entity: "User",
                id: user.id.to_string(),
            }
            .into())
        }
        async fn close(self) -> Result<(), UserHubError> {
            Ok(())
        }
    }

    fn app(mode: Mode) -> Router {
        build(AppState::new(UserRepository::new(StubStore(mode))))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_answer_root_with_banner() {
        let (status, body) = send(app(Mode::Empty), get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Running API v1\n");
    }

    #[tokio::test]
    async fn should_answer_unknown_path_with_not_found() {
        let (status, body) = send(app(Mode::Empty), get_request("/favicon.ico")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Asset not found\n");
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = send(app(Mode::Empty), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_list_empty_users() {
        let (status, body) = send(app(Mode::Empty), get_request("/api/users")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn should_return_bad_request_for_malformed_id() {
        let (status, body) = send(app(Mode::Empty), get_request("/api/users/not-a-uuid")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("not-a-uuid"));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_user() {
        let uri = format!("/api/users/{}", UserId::new());
        let (status, _) = send(app(Mode::Empty), get_request(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_unknown_user() {
        let uri = format!("/api/users/{}", UserId::new());
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app(Mode::Empty), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_create_user_with_generated_id() {
        let request = json_request("POST", "/api/users", r#"{"name":"Alice","role":"admin"}"#);
        let (status, body) = send(app(Mode::Empty), request).await;
        assert_eq!(status, StatusCode::CREATED);

        let user: User = serde_json::from_str(&body).unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.role.as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn should_keep_path_id_when_updating() {
        let id = UserId::new();
        let request = json_request("PUT", &format!("/api/users/{id}"), r#"{"name":"Bob"}"#);
        let (status, body) = send(app(Mode::Empty), request).await;
        assert_eq!(status, StatusCode::OK);

        let user: User = serde_json::from_str(&body).unwrap();
        assert_eq!(user.id, id);
        assert!(user.role.is_none());
    }

    #[tokio::test]
    async fn should_reject_empty_name() {
        let request = json_request("POST", "/api/users", r#"{"name":""}"#);
        let (status, _) = send(app(Mode::Empty), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_hide_details_when_store_unavailable() {
        let (status, body) = send(app(Mode::Unavailable), get_request("/api/users")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("internal server error"));
        assert!(!body.contains("locked"));
    }
}
