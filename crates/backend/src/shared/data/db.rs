use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

use crate::shared::config;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Minimal schema bootstrap. Tables are created on first start; existing
/// databases pass through untouched.
const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS sys_users (
        id TEXT PRIMARY KEY NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        is_admin INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sys_refresh_tokens (
        id TEXT PRIMARY KEY NOT NULL,
        user_id TEXT NOT NULL,
        token_hash TEXT NOT NULL,
        expires_at TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sys_settings (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL,
        description TEXT,
        created_at TEXT,
        updated_at TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a001_project (
        id TEXT PRIMARY KEY NOT NULL,
        user_id TEXT NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        industry TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a002_dataset (
        id TEXT PRIMARY KEY NOT NULL,
        project_id TEXT NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        schema_json TEXT NOT NULL,
        row_count INTEGER NOT NULL DEFAULT 0,
        data_type TEXT NOT NULL DEFAULT 'tabular',
        status TEXT NOT NULL DEFAULT 'ready',
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a003_generation (
        id TEXT PRIMARY KEY NOT NULL,
        dataset_id TEXT NOT NULL,
        user_id TEXT NOT NULL,
        model_type TEXT NOT NULL,
        parameters_json TEXT NOT NULL,
        row_count INTEGER NOT NULL DEFAULT 0,
        status TEXT NOT NULL DEFAULT 'completed',
        started_at TEXT NOT NULL,
        completed_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a003_privacy_metrics (
        id TEXT PRIMARY KEY NOT NULL,
        generation_id TEXT NOT NULL,
        privacy_risk_score REAL NOT NULL,
        k_anonymity_achieved INTEGER NOT NULL,
        epsilon_used REAL NOT NULL,
        leakage_probability REAL NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a003_utility_metrics (
        id TEXT PRIMARY KEY NOT NULL,
        generation_id TEXT NOT NULL,
        fidelity_score REAL NOT NULL,
        similarity_score REAL NOT NULL,
        correlation_preservation REAL NOT NULL,
        distribution_similarity REAL NOT NULL,
        ml_efficacy_score REAL NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a003_compliance_report (
        id TEXT PRIMARY KEY NOT NULL,
        generation_id TEXT NOT NULL,
        compliance_status TEXT NOT NULL,
        privacy_budget_text TEXT NOT NULL,
        anonymity_text TEXT NOT NULL,
        recommendation_text TEXT NOT NULL,
        valid_until TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
];

pub async fn initialize_database() -> anyhow::Result<()> {
    let cfg = config::load_config()?;
    let db_file = config::get_database_path(&cfg)?;
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Normalize path separators and ensure proper URL form on Windows
    let normalized = db_file.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    let conn = Database::connect(&db_url).await?;

    for sql in SCHEMA_STATEMENTS {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    tracing::info!("Database ready at {}", db_file.display());

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database connection already initialized"))?;

    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("database connection not initialized; call initialize_database() first")
}
