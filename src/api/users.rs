//! User Handlers
//!
//! CRUD endpoints under `/api/users`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info, warn};

use super::extract::{record_id, ApiBody};
use super::state::AppState;
use crate::error::{ApiError, Result};
use crate::models::{CreateUserRequest, Envelope, UpdateUserRequest, User};
use crate::store::USER_NOT_FOUND;

/// Handler for GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Json<Envelope<Vec<User>>> {
    let users = state.store.read().await.list_users();
    debug!(count = users.len(), "listing users");

    Json(Envelope::ok(users, "Users retrieved successfully"))
}

/// Handler for GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<User>>> {
    let id = record_id(&id, USER_NOT_FOUND)?;
    let user = state.store.read().await.get_user(id)?;

    Ok(Json(Envelope::ok(user, "User retrieved successfully")))
}

/// Handler for POST /api/users
///
/// Requires non-empty `name` and `email`; `age` defaults to 18.
pub async fn create_user(
    State(state): State<AppState>,
    ApiBody(req): ApiBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<Envelope<User>>)> {
    let user = state.store.write().await.create_user(req).map_err(|err| {
        warn!(error = %err, "rejected user creation");
        err
    })?;
    info!(id = user.id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(user, "User created successfully")),
    ))
}

/// Handler for PUT /api/users/:id
///
/// Only the fields present in the body are changed. An unknown id is a
/// 404 whatever the body holds.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<ApiBody<UpdateUserRequest>, ApiError>,
) -> Result<Json<Envelope<User>>> {
    let id = record_id(&id, USER_NOT_FOUND)?;
    let mut store = state.store.write().await;
    store.get_user(id)?;

    let ApiBody(req) = body?;
    let user = store.update_user(id, req)?;
    info!(id, "user updated");

    Ok(Json(Envelope::ok(user, "User updated successfully")))
}

/// Handler for DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>> {
    let id = record_id(&id, USER_NOT_FOUND)?;
    state.store.write().await.delete_user(id)?;
    info!(id, "user deleted");

    Ok(Json(Envelope::done("User deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    fn seeded_state() -> AppState {
        AppState::new(Store::seeded())
    }

    fn create_req(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            age: None,
        }
    }

    #[tokio::test]
    async fn test_list_users_handler() {
        let response = list_users(State(seeded_state())).await;
        assert!(response.success);
        assert_eq!(response.data.as_ref().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = seeded_state();

        let (status, created) = create_user(
            State(state.clone()),
            ApiBody(create_req("Ada", "ada@example.com")),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        let created = created.0.data.unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.age, 18);

        let fetched = get_user(State(state), Path("4".to_string())).await.unwrap();
        assert_eq!(fetched.0.data.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_user_invalid_request() {
        let req = CreateUserRequest {
            name: Some("Ada".into()),
            ..Default::default()
        };
        let result = create_user(State(seeded_state()), ApiBody(req)).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_get_user_non_numeric_id() {
        let result = get_user(State(seeded_state()), Path("abc".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_and_delete_handler() {
        let state = seeded_state();

        let req = UpdateUserRequest {
            age: Some(31),
            ..Default::default()
        };
        let updated = update_user(State(state.clone()), Path("2".to_string()), Ok(ApiBody(req)))
            .await
            .unwrap();
        let updated = updated.0.data.unwrap();
        assert_eq!(updated.age, 31);
        assert_eq!(updated.name, "李四");

        let deleted = delete_user(State(state.clone()), Path("2".to_string()))
            .await
            .unwrap();
        assert!(deleted.success);
        assert!(deleted.data.is_none());

        let result = get_user(State(state), Path("2".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_unknown_id_wins_over_bad_body() {
        let state = seeded_state();
        let bad_body = Err(ApiError::InvalidRequest("malformed".into()));

        let result = update_user(State(state.clone()), Path("999".to_string()), bad_body).await;
        assert!(matches!(result, Err(ApiError::NotFound(msg)) if msg == USER_NOT_FOUND));

        let bad_body = Err(ApiError::InvalidRequest("malformed".into()));
        let result = update_user(State(state), Path("1".to_string()), bad_body).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }
}
