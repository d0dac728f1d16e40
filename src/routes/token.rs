use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{RObtainToken, TokenRes};
use crate::utils::password::verify_password;

/// Login. Returns the token issued at registration. Unknown users and wrong
/// passwords get the same answer.
#[post("/")]
async fn obtain(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RObtainToken>,
) -> ApiResult<TokenRes> {
    let payload = body.into_inner();
    payload.validate()?;

    let user = match db.get_user_by_username(&payload.username).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Err(AppError::InvalidCredentials),
        Err(e) => return Err(e),
    };

    if !verify_password(&payload.password, &user.password_hash).unwrap_or(false) {
        return Err(AppError::InvalidCredentials);
    }

    let token = db.token_for_user(&user.id).await?;
    Ok(ApiResponse::Ok(TokenRes { token }))
}
