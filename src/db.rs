use std::fs::{self, OpenOptions};
use std::path::Path;

use log::{error, info};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::config::AppConfig;
use crate::error::AppError;

const SCHEMA_SQL: &str = include_str!("../schema-sqlite.sql");

pub async fn connect_db(config: &AppConfig) -> Result<DatabaseConnection, AppError> {
    ensure_sqlite_path(config)?;
    let mut opt = ConnectOptions::new(config.database_url());
    opt.max_connections(config.max_connections)
        .sqlx_logging(config.sqlx_logging);
    let db = Database::connect(opt).await?;
    init_schema(&db).await?;
    Ok(db)
}

fn ensure_sqlite_path(config: &AppConfig) -> Result<(), AppError> {
    let raw = config.database_url();
    let Some(path) = sqlite_file_path(&raw) else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path)?;
    Ok(())
}

fn sqlite_file_path(url: &str) -> Option<&Path> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let rest = rest.split('?').next().unwrap_or(rest);
    if rest.is_empty() || rest.contains(":memory:") {
        return None;
    }
    Some(Path::new(rest))
}

/// Creates any missing table or index. Safe to run on every start.
pub async fn init_schema<C: ConnectionTrait>(db: &C) -> Result<(), AppError> {
    let backend = db.get_database_backend();
    db.execute(Statement::from_string(backend, "PRAGMA foreign_keys = ON"))
        .await?;

    let statements = split_sql(SCHEMA_SQL);
    for stmt in &statements {
        if let Err(e) = db
            .execute(Statement::from_string(backend, stmt.as_str()))
            .await
        {
            error!("schema statement failed: {} (sql={})", e, stmt);
            return Err(e.into());
        }
    }
    info!("schema ready ({} statements)", statements.len());
    Ok(())
}

/// Names of the user tables currently present, sorted.
pub async fn list_tables<C: ConnectionTrait>(db: &C) -> Result<Vec<String>, AppError> {
    let backend = db.get_database_backend();
    let rows = db
        .query_all(Statement::from_string(
            backend,
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        ))
        .await?;
    let mut names = Vec::with_capacity(rows.len());
    for row in rows {
        names.push(row.try_get::<String>("", "name")?);
    }
    Ok(names)
}

fn split_sql(input: &str) -> Vec<String> {
    let mut buf = String::new();
    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("--") || trimmed.is_empty() {
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }
    buf.split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
