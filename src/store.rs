//! Database bootstrap: create the database and the `products` table when missing.

use crate::error::{AppError, ConfigError};
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const PRODUCTS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        count BIGINT NOT NULL,
        price DOUBLE PRECISION NOT NULL
    )
"#;

/// Create the `products` table if it does not exist. Idempotent.
pub async fn ensure_products_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(PRODUCTS_DDL).execute(pool).await?;
    Ok(())
}

/// Maintenance connection derived from `DATABASE_URL`: same server, `postgres` database.
#[derive(Debug, PartialEq)]
struct AdminTarget {
    admin_url: String,
    database: String,
}

impl AdminTarget {
    fn from_url(url: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::Invalid {
            key: "DATABASE_URL",
            value: url.to_string(),
        };
        let authority_start = url.find("://").map(|i| i + 3).ok_or_else(invalid)?;
        let slash = url[authority_start..].find('/').ok_or_else(invalid)? + authority_start;
        let (database, query) = match url[slash + 1..].split_once('?') {
            Some((db, q)) => (db, format!("?{}", q)),
            None => (&url[slash + 1..], String::new()),
        };
        Ok(AdminTarget {
            admin_url: format!("{}/postgres{}", &url[..slash], query),
            database: database.trim().to_string(),
        })
    }
}

/// Create the database named in `database_url` when the server does not have it yet.
/// Runs before the pool is built, over a single connection to the `postgres` database.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let target = AdminTarget::from_url(database_url)?;
    if target.database.is_empty() || target.database == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&target.admin_url).map_err(|_| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: database_url.to_string(),
    })?;
    let mut conn = opts.connect().await?;
    let (present,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&target.database)
        .fetch_one(&mut conn)
        .await?;
    if present {
        return Ok(());
    }
    tracing::info!(database = %target.database, "creating database");
    sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&target.database)))
        .execute(&mut conn)
        .await?;
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_target_swaps_database_name() {
        let t = AdminTarget::from_url("postgres://user:pw@localhost:5432/products").unwrap();
        assert_eq!(t.database, "products");
        assert_eq!(t.admin_url, "postgres://user:pw@localhost:5432/postgres");
    }

    #[test]
    fn query_string_is_kept_on_admin_url() {
        let t = AdminTarget::from_url("postgres://localhost/shop?sslmode=disable").unwrap();
        assert_eq!(t.database, "shop");
        assert_eq!(t.admin_url, "postgres://localhost/postgres?sslmode=disable");
    }

    #[test]
    fn url_without_path_is_a_config_error() {
        match AdminTarget::from_url("postgres://localhost") {
            Err(ConfigError::Invalid { key, value }) => {
                assert_eq!(key, "DATABASE_URL");
                assert_eq!(value, "postgres://localhost");
            }
            other => panic!("expected config error, got {:?}", other),
        }
        assert!(AdminTarget::from_url("localhost/products").is_err());
    }

    #[tokio::test]
    async fn bootstrap_reports_bad_url_as_config_error() {
        let err = ensure_database_exists("not a url").await.unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid { key: "DATABASE_URL", .. })));
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quote_ident("my\"db"), "\"my\"\"db\"");
    }
}
