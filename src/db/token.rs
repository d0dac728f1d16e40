use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use entity::auth_token::{Column, Entity as AuthToken};
use entity::user::Model as UserModel;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

impl PostgresService {
    /// Token issued at registration; every user has exactly one.
    pub async fn token_for_user(&self, user_id: &Uuid) -> Result<String, AppError> {
        Ok(AuthToken::find()
            .filter(Column::UserId.eq(*user_id))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Token does not exist".into()))?
            .token)
    }

    /// Keyed lookup: bearer token string to owning user.
    pub async fn get_user_by_token(&self, token: &str) -> Result<UserModel, AppError> {
        let row = AuthToken::find_by_id(token.to_string())
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Token does not exist".into()))?;
        self.get_user_by_id(&row.user_id).await
    }
}
