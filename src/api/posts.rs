//! Post Handlers
//!
//! Posts can be listed, fetched and created; there is no update or delete.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{debug, info, warn};

use super::extract::{record_id, ApiBody};
use super::state::AppState;
use crate::error::Result;
use crate::models::{CreatePostRequest, Envelope, Post};
use crate::store::POST_NOT_FOUND;

/// Handler for GET /api/posts
pub async fn list_posts(State(state): State<AppState>) -> Json<Envelope<Vec<Post>>> {
    let posts = state.store.read().await.list_posts();
    debug!(count = posts.len(), "listing posts");

    Json(Envelope::ok(posts, "Posts retrieved successfully"))
}

/// Handler for GET /api/posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Post>>> {
    let id = record_id(&id, POST_NOT_FOUND)?;
    let post = state.store.read().await.get_post(id)?;

    Ok(Json(Envelope::ok(post, "Post retrieved successfully")))
}

/// Handler for POST /api/posts
///
/// Stamps the post with today's UTC date. `authorId` defaults to 1 and is
/// not checked against existing users.
pub async fn create_post(
    State(state): State<AppState>,
    ApiBody(req): ApiBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<Envelope<Post>>)> {
    let today = Utc::now().date_naive();
    let post = state
        .store
        .write()
        .await
        .create_post(req, today)
        .map_err(|err| {
            warn!(error = %err, "rejected post creation");
            err
        })?;
    info!(id = post.id, author_id = post.author_id, "post created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(post, "Post created successfully")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::store::Store;

    #[tokio::test]
    async fn test_create_post_handler_stamps_today() {
        let state = AppState::new(Store::seeded());
        let req = CreatePostRequest {
            title: Some("Third".into()),
            content: Some("More words".into()),
            author_id: None,
        };

        let (status, body) = create_post(State(state.clone()), ApiBody(req))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        let post = body.0.data.unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.author_id, 1);
        assert_eq!(post.created_at, Utc::now().date_naive());

        let listed = list_posts(State(state)).await;
        assert_eq!(listed.data.as_ref().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_post_not_found() {
        let state = AppState::new(Store::seeded());
        let result = get_post(State(state), Path("99".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(msg)) if msg == POST_NOT_FOUND));
    }
}
