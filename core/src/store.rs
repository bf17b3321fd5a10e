// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use crate::{AgendaError, Pedido, PedidoId};

/// Storage key of the order list.
pub const KEY_PEDIDOS: &str = "agenda.pedidos";

/// Storage key of the id counter.
pub const KEY_NEXT_ID: &str = "agenda.nextId";

/// A string key/value storage.
#[async_trait]
pub trait Storage: fmt::Debug + Send + Sync {
    /// Returns the value stored under `key`, or `None` if there is none.
    async fn get_item(&self, key: &str) -> Result<Option<String>, AgendaError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), AgendaError>;
}

/// Storage keeping one file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AgendaError> {
        match fs::read_to_string(self.path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes a sibling temp file and renames it over the key, so an interrupted write
    /// never leaves a truncated value behind.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), AgendaError> {
        fs::create_dir_all(&self.dir).await?;
        let tmp = self.dir.join(format!("{key}.tmp"));
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, self.path(key)).await?;
        Ok(())
    }
}

/// Storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AgendaError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AgendaError> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persists the order list and the id counter.
#[derive(Debug)]
pub struct Store {
    storage: Box<dyn Storage>,
}

impl Store {
    /// Opens the store in the given directory, or in memory if `state_dir` is `None`.
    pub fn open(state_dir: Option<&Path>) -> Self {
        match state_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "opening file storage");
                Self::new(FileStorage::new(dir))
            }
            None => {
                tracing::info!("opening in-memory storage");
                Self::new(MemoryStorage::new())
            }
        }
    }

    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Loads the persisted list. A missing or corrupt list loads as empty.
    pub async fn load(&self) -> Result<Vec<Pedido>, AgendaError> {
        let Some(content) = self.storage.get_item(KEY_PEDIDOS).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&content) {
            Ok(list) => Ok(list),
            Err(e) => {
                tracing::warn!(err = %e, "persisted order list is corrupt, starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the persisted list.
    pub async fn save(&self, pedidos: &[Pedido]) -> Result<(), AgendaError> {
        let content = serde_json::to_string(pedidos)?;
        self.storage.set_item(KEY_PEDIDOS, &content).await
    }

    /// Returns the next free id and advances the persisted counter.
    pub async fn next_id(&self) -> Result<PedidoId, AgendaError> {
        let n = self
            .storage
            .get_item(KEY_NEXT_ID)
            .await?
            .and_then(|a| a.trim().parse::<PedidoId>().ok())
            .unwrap_or(1);

        let next = n.checked_add(1).ok_or(AgendaError::IdsExhausted)?;
        self.storage
            .set_item(KEY_NEXT_ID, &next.to_string())
            .await?;
        Ok(n)
    }
}
