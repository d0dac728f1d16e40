use actix_web::{patch, web, HttpRequest};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::{AppError, FieldErrors};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{ChangePasswordRes, RChangePassword, BLANK_MSG};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::webutils::identify;

/// Authenticated password change; accepts bearer token or basic credentials.
#[patch("/")]
async fn change_password(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RChangePassword>,
) -> ApiResult<ChangePasswordRes> {
    let caller = identify(&req, &db).await?;
    let payload = body.into_inner();

    let mut errors = FieldErrors::new();
    if payload.old_password.is_empty() {
        errors.push("old_password", BLANK_MSG);
    }
    if payload.new_password.is_empty() {
        errors.push("new_password", BLANK_MSG);
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    if !verify_password(&payload.old_password, &caller.password_hash).unwrap_or(false) {
        return Err(AppError::field("old_password", "Wrong password."));
    }

    let hash = hash_password(&payload.new_password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;
    db.set_password_hash(caller.id, hash).await?;

    Ok(ApiResponse::Ok(ChangePasswordRes::updated()))
}
