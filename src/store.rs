//! Storage adapter for the `users` table. All access to the SQLite store goes through [`UserStore`].

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::model::{User, UserInput};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        address TEXT NOT NULL
    )
"#;

const INSERT_USER: &str = "INSERT INTO users (name, email, address) VALUES (?, ?, ?)";
const SELECT_USERS: &str = "SELECT id, name, email, address FROM users ORDER BY id";
const SELECT_USER_BY_ID: &str = "SELECT id, name, email, address FROM users WHERE id = ?";
const UPDATE_USER_BY_ID: &str = "UPDATE users SET name = ?, email = ?, address = ? WHERE id = ?";
const DELETE_USER_BY_ID: &str = "DELETE FROM users WHERE id = ?";

/// Handle to the store. Cloning shares the underlying pool.
#[derive(Clone, Debug)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Open the store and make sure the `users` table exists.
    /// Open failure is returned; table creation failure is only logged.
    pub async fn bootstrap(config: &StoreConfig) -> Result<Self, StoreError> {
        let store = Self::open(config).await?;
        if let Err(e) = store.ensure_users_table().await {
            tracing::error!(error = %e.message(), "table creation error");
        }
        Ok(store)
    }

    /// Open (creating the file if absent) the SQLite store named by `config.database_url`.
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut pool_opts = SqlitePoolOptions::new().max_connections(config.max_connections);
        if config.database_url.contains(":memory:") {
            // An in-memory database lives exactly as long as its one connection.
            pool_opts = pool_opts
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }
        let opened = match SqliteConnectOptions::from_str(&config.database_url) {
            Ok(opts) => pool_opts.connect_with(opts.create_if_missing(true)).await,
            Err(e) => Err(e),
        };
        match opened {
            Ok(pool) => {
                tracing::info!(database_url = %config.database_url, "connected to the database");
                Ok(Self { pool })
            }
            Err(e) => {
                tracing::error!(database_url = %config.database_url, error = %e, "error opening database");
                Err(e.into())
            }
        }
    }

    /// Idempotent `CREATE TABLE IF NOT EXISTS users`.
    pub async fn ensure_users_table(&self) -> Result<(), StoreError> {
        tracing::debug!(sql = %CREATE_USERS_TABLE.trim(), "query");
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        tracing::info!("users table created or existed");
        Ok(())
    }

    /// Insert one row and return its store-assigned id.
    pub async fn insert(&self, input: &UserInput) -> Result<i64, StoreError> {
        tracing::debug!(sql = %INSERT_USER, "query");
        let res = sqlx::query(INSERT_USER)
            .bind(input.name_text())
            .bind(input.email_text())
            .bind(input.address_text())
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    /// Every row in insertion order.
    pub async fn select_all(&self) -> Result<Vec<User>, StoreError> {
        tracing::debug!(sql = %SELECT_USERS, "query");
        let rows = sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Row whose id matches `id`. The id is bound as text, so the column's integer
    /// affinity decides the match (`"1"`, `"1.0"` and `"1e0"` all find row 1).
    pub async fn select_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        tracing::debug!(sql = %SELECT_USER_BY_ID, id, "query");
        let row = sqlx::query_as::<_, User>(SELECT_USER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Overwrite name, email and address of one row. Returns rows affected; an unknown id is `Ok(0)`.
    pub async fn update_by_id(&self, id: &str, input: &UserInput) -> Result<u64, StoreError> {
        tracing::debug!(sql = %UPDATE_USER_BY_ID, id, "query");
        let res = sqlx::query(UPDATE_USER_BY_ID)
            .bind(input.name_text())
            .bind(input.email_text())
            .bind(input.address_text())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    /// Returns rows affected; an unknown id is `Ok(0)`.
    pub async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        tracing::debug!(sql = %DELETE_USER_BY_ID, id, "query");
        let res = sqlx::query(DELETE_USER_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
