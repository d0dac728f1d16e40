use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserRes};
use crate::utils::password::hash_password;

/// Registration. Open endpoint; issues the user's auth token as part of the
/// insert, but the token itself is only handed out by `POST /token/`.
#[post("/")]
async fn create(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let payload = body.into_inner();
    payload.validate()?;

    let password_hash = hash_password(&payload.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let user = db
        .create_user(DBUserCreate {
            username: payload.username,
            email: payload.email,
            first_name: payload.first_name.unwrap_or_default(),
            last_name: payload.last_name.unwrap_or_default(),
            password_hash,
        })
        .await?;

    Ok(ApiResponse::Created(UserRes::from(user)))
}
