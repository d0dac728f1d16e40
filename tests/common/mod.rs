use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

use account_api::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
pub mod test_data {
    use account_api::types::user::RUserCreate;

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            username: "test".to_string(),
            email: "test@gmail.com".to_string(),
            password: "test12345".to_string(),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
        }
    }

    pub fn sample_user_with_username(username: &str) -> RUserCreate {
        RUserCreate {
            username: username.to_string(),
            email: format!("{}@gmail.com", username),
            password: "test12345".to_string(),
            first_name: None,
            last_name: None,
        }
    }
}
