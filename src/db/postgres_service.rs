use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct PostgresService {
    pub(crate) database_connection: DatabaseConnection,
}

impl PostgresService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        log::info!("Connecting to PostgreSQL...");
        let database_connection = Database::connect(uri).await?;
        log::info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        log::info!("Connected to PostgreSQL.");
        Ok(Self {
            database_connection,
        })
    }
}
