//! JSON REST handlers for users.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use userhub_app::ports::UserStore;
use userhub_domain::error::{UserHubError, ValidationError};
use userhub_domain::id::UserId;
use userhub_domain::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a user.
#[derive(Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub role: Option<String>,
}

impl UserRequest {
    fn into_user(self, id: Option<UserId>) -> Result<User, UserHubError> {
        let mut builder = User::builder().name(self.name);
        if let Some(id) = id {
            builder = builder.id(id);
        }
        if let Some(role) = self.role {
            builder = builder.role(role);
        }
        builder.build()
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<User>),
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
    Created(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<UserId, ApiError> {
    UserId::from_str(raw).map_err(|_| {
        ApiError::from(UserHubError::RecordInvalid(ValidationError::InvalidId {
            value: raw.to_string(),
        }))
    })
}

/// `GET /api/users`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: UserStore + Send + Sync + 'static,
{
    let users = state.user_repository.all().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /api/users/{id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: UserStore + Send + Sync + 'static,
{
    let user_id = parse_id(&id)?;
    let user = state.user_repository.one(user_id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /api/users`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<UserRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: UserStore + Send + Sync + 'static,
{
    let user = req.into_user(None)?;
    let saved = state.user_repository.save(user).await?;
    Ok(CreateResponse::Created(Json(saved)))
}

/// `PUT /api/users/{id}`
pub async fn update<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(req): Json<UserRequest>,
) -> Result<GetResponse, ApiError>
where
    S: UserStore + Send + Sync + 'static,
{
    let user_id = parse_id(&id)?;
    let user = req.into_user(Some(user_id))?;
    let saved = state.user_repository.save(user).await?;
    Ok(GetResponse::Ok(Json(saved)))
}

/// `DELETE /api/users/{id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: UserStore + Send + Sync + 'static,
{
    let user_id = parse_id(&id)?;
    state.user_repository.delete(user_id).await?;
    Ok(DeleteResponse::NoContent)
}
