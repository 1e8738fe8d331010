use log::info;
use social_schema::config::AppConfig;
use social_schema::db::connect_db;
use social_schema::error::AppError;
use social_schema::store;

#[actix_rt::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = AppConfig::from_env();
    let db = connect_db(&config).await?;
    info!("database ready at {}", config.database_url());

    for (table, rows) in store::row_counts(&db).await? {
        info!("{} rows={}", table, rows);
    }
    Ok(())
}
