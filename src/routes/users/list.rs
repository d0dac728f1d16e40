use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;

#[get("/")]
async fn list(db: web::Data<Arc<PostgresService>>) -> ApiResult<Vec<UserRes>> {
    let users = db.list_users().await?;
    Ok(ApiResponse::Ok(
        users.into_iter().map(UserRes::from).collect(),
    ))
}
