use color_eyre::Result;
use sqlx::SqlitePool;

struct Migration {
    version: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "V1",
        sql: include_str!("../../migrations/V1__init.sql"),
    },
    Migration {
        version: "V2",
        sql: include_str!("../../migrations/V2__seed_categories.sql"),
    },
];

pub async fn run(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    for migration in MIGRATIONS {
        if is_applied(pool, migration.version).await? {
            continue;
        }

        let mut tx = pool.begin().await?;

        sqlx::raw_sql(migration.sql).execute(&mut *tx).await?;

        sqlx::query("INSERT INTO schema_migrations (version) VALUES (?1)")
            .bind(migration.version)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(version = migration.version, "applied database migration");
    }

    Ok(())
}

pub async fn is_applied(pool: &SqlitePool, version: &str) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations WHERE version = ?1")
        .bind(version)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}
