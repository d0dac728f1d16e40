use actix_web::{delete, get, patch, web, HttpRequest};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpdate, UserPatch, UserRes};
use crate::utils::password::hash_password;
use crate::utils::webutils::identify;

#[get("/{id}/")]
async fn retrieve(db: web::Data<Arc<PostgresService>>, path: web::Path<Uuid>) -> ApiResult<UserRes> {
    let user = db.get_user_by_id(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(UserRes::from(user)))
}

/// Owner-only partial update. A supplied password is re-hashed, never stored
/// as sent.
#[patch("/{id}/")]
async fn update(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserRes> {
    let id = path.into_inner();
    let caller = identify(&req, &db).await?;
    // resolve the target before the ownership check so an absent id is a 404
    let target = db.get_user_by_id(&id).await?;
    if caller.id != target.id {
        return Err(AppError::Forbidden);
    }

    let payload = body.into_inner();
    payload.validate()?;

    let password_hash = match payload.password {
        Some(password) => Some(
            hash_password(&password)
                .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?,
        ),
        None => None,
    };

    let user = db
        .update_user(
            id,
            UserPatch {
                username: payload.username,
                email: payload.email,
                first_name: payload.first_name,
                last_name: payload.last_name,
                password_hash,
            },
        )
        .await?;

    Ok(ApiResponse::Ok(UserRes::from(user)))
}

#[delete("/{id}/")]
async fn remove(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let id = path.into_inner();
    let caller = identify(&req, &db).await?;
    let target = db.get_user_by_id(&id).await?;
    if caller.id != target.id {
        return Err(AppError::Forbidden);
    }

    db.delete_user(&id).await?;
    Ok(ApiResponse::NoContent)
}
