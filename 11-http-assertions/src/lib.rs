// Chapter 11: HTTP assertion chains.
// A small user API over the shared in-memory store; the interesting part is
// in tests/api.rs, where every endpoint is exercised through fluent
// request/response assertions without binding a real socket.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use userstore::{InMemoryRepository, RepoError, User, UserRepository};

type SharedRepo = Arc<InMemoryRepository>;

/// Store pre-loaded with the two users the read-only tests expect.
pub fn seeded_repository() -> SharedRepo {
    Arc::new(InMemoryRepository::with_users([
        User::new(1, "John Doe").with_email("john@example.com"),
        User::new(2, "Jane Smith").with_email("jane@example.com"),
    ]))
}

pub fn app() -> Router {
    app_with(seeded_repository())
}

pub fn app_with(repo: SharedRepo) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
        .route("/search", get(search))
        .with_state(repo)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

async fn list_users(State(repo): State<SharedRepo>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(repo.list_all()?))
}

async fn get_user(
    State(repo): State<SharedRepo>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(repo.fetch(id)?))
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
}

async fn create_user(
    State(repo): State<SharedRepo>,
    Json(body): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    debug!(name = %body.name, "creating user over http");
    let stored = repo.save(User {
        id: 0,
        name: body.name,
        email: body.email,
    })?;
    Ok((StatusCode::CREATED, Json(stored)))
}

// Echoes its query parameters; exists so the tests can assert on query
// handling without inventing a richer API.
async fn search(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    Json(json!({
        "filter": params.get("filter").cloned().unwrap_or_default(),
        "limit": params.get("limit").cloned().unwrap_or_default(),
    }))
}

struct ApiError(RepoError);

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RepoError::NotFound(_) => StatusCode::NOT_FOUND,
            RepoError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
