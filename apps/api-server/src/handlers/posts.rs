//! Post handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;
use validator::Validate;

use quill_core::domain::PostDraft;
use quill_shared::dto::PostRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// A path segment that is not a UUID counts as no id at all.
fn optional_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

fn validated_draft(req: PostRequest) -> AppResult<PostDraft> {
    req.validate()?;
    Ok(PostDraft::new(req.title, req.content))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.posts.list().await))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(optional_id(&path)).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let draft = validated_draft(body.into_inner())?;
    let post = state.posts.add(draft).await?;

    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/posts/{}", post.id)))
        .json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = Uuid::parse_str(&path)
        .map_err(|e| AppError::Validation(vec![format!("id: {}", e)]))?;
    let message = state.posts.remove(id).await?;
    Ok(HttpResponse::Ok().json(message))
}

/// PUT /api/posts/{id}
///
/// A missing or undecodable body is treated as "no post supplied".
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: Option<web::Json<PostRequest>>,
) -> AppResult<HttpResponse> {
    let draft = body
        .map(|body| validated_draft(body.into_inner()))
        .transpose()?;
    let post = state.posts.update(optional_id(&path), draft).await?;
    Ok(HttpResponse::Ok().json(post))
}
