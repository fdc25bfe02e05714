use sqlx::{PgPool, migrate::Migrator};

use crate::{config::Environment, error::Result};

static MIGRATOR: Migrator = sqlx::migrate!();

/// Brings the schema up to date. Outside production the tables are dropped
/// first so every boot starts from a clean schema.
pub async fn sync_schema(pool: &PgPool, environment: Environment) -> Result<()> {
    if !environment.is_production() {
        tracing::warn!("Recreating database schema (non-production environment)");

        sqlx::query("DROP TABLE IF EXISTS products")
            .execute(pool)
            .await?;
        sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
            .execute(pool)
            .await?;
    }

    MIGRATOR.run(pool).await?;

    tracing::info!("Database synchronized");

    Ok(())
}
