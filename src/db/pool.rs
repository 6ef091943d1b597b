use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqlitePoolOptions::new().acquire_timeout(std::time::Duration::from_secs(5));

    // An in-memory database lives and dies with its single connection.
    let options = if database_url.contains(":memory:") {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options.max_connections(5)
    };

    options.connect(database_url).await
}

pub async fn run_migrations(db: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(db).await
}
