use actix_web::http::header::Header;
use actix_web::HttpRequest;
use actix_web_httpauth::headers::authorization::{Authorization, Basic, Bearer};
use entity::user::Model as UserModel;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::password::verify_password;

/// Resolves the calling user from the Authorization header.
///
/// Accepts `Bearer tok_...` (token table lookup) and `Basic` credentials
/// (argon2 verification against the stored hash). Lookup failures collapse
/// into `Unauthorized` so callers can't probe which accounts exist.
pub async fn identify(req: &HttpRequest, db: &PostgresService) -> Result<UserModel, AppError> {
    if let Ok(bearer) = Authorization::<Bearer>::parse(req) {
        let scheme = bearer.into_scheme();
        // unknown token is a credential failure, anything else is ours
        return match db.get_user_by_token(scheme.token()).await {
            Ok(user) => Ok(user),
            Err(AppError::NotFound) => Err(AppError::Unauthorized),
            Err(e) => Err(e),
        };
    }

    if let Ok(basic) = Authorization::<Basic>::parse(req) {
        let scheme = basic.into_scheme();
        let user = match db.get_user_by_username(scheme.user_id()).await {
            Ok(user) => user,
            Err(AppError::NotFound) => return Err(AppError::Unauthorized),
            Err(e) => return Err(e),
        };
        let password = scheme.password().ok_or(AppError::Unauthorized)?;
        if verify_password(password, &user.password_hash).unwrap_or(false) {
            return Ok(user);
        }
        return Err(AppError::Unauthorized);
    }

    Err(AppError::Unauthorized)
}
