use std::collections::HashMap;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;
use tokio::sync::RwLock;

pub const CYCLE_KEY: &str = "wellness_cycle";
pub const MOODS_KEY: &str = "wellness_moods";
pub const SYMPTOMS_KEY: &str = "wellness_symptoms";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored value under `{key}` is malformed: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Whole JSON documents under opaque keys.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;
    async fn save(&self, key: &str, value: Value) -> Result<(), StoreError>;
    /// Writes every entry or none of them.
    async fn save_batch(&self, entries: Vec<(String, Value)>) -> Result<(), StoreError>;
}

pub async fn load_json<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(value) = store.load(key).await? else {
        return Ok(None);
    };
    serde_json::from_value(value)
        .map(Some)
        .map_err(|source| StoreError::Serialization { key: key.to_string(), source })
}

pub fn to_json<T: Serialize>(key: &str, value: &T) -> Result<Value, StoreError> {
    serde_json::to_value(value)
        .map_err(|source| StoreError::Serialization { key: key.to_string(), source })
}

pub async fn save_json<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    store.save(key, to_json(key, value)?).await
}

const UPSERT: &str = "INSERT INTO kv_store (key, value) VALUES ($1, $2)
     ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value JSONB NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl KvStore for PgStore {
    async fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let value = sqlx::query_scalar::<_, Value>("SELECT value FROM kv_store WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn save(&self, key: &str, value: Value) -> Result<(), StoreError> {
        sqlx::query(UPSERT)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("❌ kv save failed for {}: {}", key, e);
                e
            })?;
        Ok(())
    }

    async fn save_batch(&self, entries: Vec<(String, Value)>) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        for (key, value) in entries {
            sqlx::query(UPSERT)
                .bind(&key)
                .bind(value)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("❌ kv batch save failed for {}: {}", key, e);
                    e
                })?;
        }
        tx.commit().await?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn save_batch(&self, entries: Vec<(String, Value)>) -> Result<(), StoreError> {
        self.entries.write().await.extend(entries);
        Ok(())
    }
}
