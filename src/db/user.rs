use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    user::{DBUserCreate, UserPatch},
};
use crate::utils::token::{self, new_token};
use chrono::Utc;
use entity::auth_token::ActiveModel as AuthTokenActive;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn count_users(&self) -> Result<u64, AppError> {
        Ok(User::find().count(&self.database_connection).await?)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find().all(&self.database_connection).await?)
    }

    /// Registration: inserts the user and its auth token in one transaction.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::field(
                "username",
                "A user with that username already exists.",
            ));
        }
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::field(
                "email",
                "A user with that email address already exists.",
            ));
        }

        let uid = token::new_id();
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        User::insert(UserActive {
            id: Set(uid),
            username: Set(payload.username),
            email: Set(payload.email),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            password_hash: Set(payload.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        entity::auth_token::Entity::insert(AuthTokenActive {
            token: Set(new_token()),
            user_id: Set(uid),
            created_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        self.get_user_by_id(&uid).await
    }

    /// Partial profile update. Uniqueness is re-checked when the username or
    /// email actually changes, inside the same transaction as the write.
    pub async fn update_user(&self, user_id: Uuid, patch: UserPatch) -> Result<UserModel, AppError> {
        let txn = self.database_connection.begin().await?;

        let user = User::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;

        if let Some(username) = &patch.username {
            if username != &user.username {
                let taken = User::find()
                    .filter(entity::user::Column::Username.eq(username.as_str()))
                    .count(&txn)
                    .await?
                    > 0;
                if taken {
                    return Err(AppError::field(
                        "username",
                        "A user with that username already exists.",
                    ));
                }
            }
        }
        if let Some(email) = &patch.email {
            if email != &user.email {
                let taken = User::find()
                    .filter(entity::user::Column::Email.eq(email.as_str()))
                    .count(&txn)
                    .await?
                    > 0;
                if taken {
                    return Err(AppError::field(
                        "email",
                        "A user with that email address already exists.",
                    ));
                }
            }
        }

        let mut am: UserActive = user.into();
        if let Some(username) = patch.username {
            am.username = Set(username);
        }
        if let Some(email) = patch.email {
            am.email = Set(email);
        }
        if let Some(first_name) = patch.first_name {
            am.first_name = Set(first_name);
        }
        if let Some(last_name) = patch.last_name {
            am.last_name = Set(last_name);
        }
        if let Some(password_hash) = patch.password_hash {
            am.password_hash = Set(password_hash);
        }
        am.updated_at = Set(Utc::now());
        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    pub async fn set_password_hash(&self, user_id: Uuid, hash: String) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(&user_id).await?.into();
        am.password_hash = Set(hash);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await.map(|_| ())?)
    }

    /// The auth token row goes with the user via FK cascade.
    pub async fn delete_user(&self, user_id: &Uuid) -> Result<(), AppError> {
        let res = User::delete_by_id(*user_id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
