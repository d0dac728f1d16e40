use actix_web::{web, App};
use std::sync::Arc;

use account_api::{
    db::postgres_service::PostgresService, types::user::DBUserCreate,
    utils::password::hash_password,
};
use entity::user::Model as UserModel;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(account_api::routes::configure_routes)
    }

    /// Registers a fixture user directly through the service layer and
    /// returns it together with its bearer token.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str, password: &str) -> (UserModel, String) {
        let password_hash = hash_password(password).expect("Failed to hash password");

        let user = self
            .db
            .create_user(DBUserCreate {
                username: username.to_string(),
                email: format!("{}@test.com", username),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                password_hash,
            })
            .await
            .expect("Failed to create user");

        let token = self
            .db
            .token_for_user(&user.id)
            .await
            .expect("Failed to fetch token");

        (user, token)
    }
}
