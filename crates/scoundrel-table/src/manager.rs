//! Table manager: creates, tracks, and routes actions to tables.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use scoundrel_core::{Action, GameState};

use crate::table::spawn_table;
use crate::{Dispatch, TableConfig, TableError, TableHandle, TableId, TableInfo};

/// Counter for generating unique table IDs.
static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(1);

/// Manages all open tables.
///
/// This is the entry point for table operations from higher layers.
pub struct TableManager {
    tables: HashMap<TableId, TableHandle>,
}

impl TableManager {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Opens a table around `game` and returns its ID.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn create_table(&mut self, game: GameState, config: TableConfig) -> TableId {
        let table_id = TableId(NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed));
        let handle = spawn_table(table_id, game, config);
        self.tables.insert(table_id, handle);
        tracing::info!(%table_id, "table created");
        table_id
    }

    /// Returns a cloned handle to a table.
    pub fn table(&self, table_id: TableId) -> Result<TableHandle, TableError> {
        self.tables
            .get(&table_id)
            .cloned()
            .ok_or(TableError::NotFound(table_id))
    }

    /// Routes an action to a table and waits for the outcome.
    pub async fn dispatch(
        &self,
        table_id: TableId,
        action: Action,
    ) -> Result<Dispatch, TableError> {
        let handle = self
            .tables
            .get(&table_id)
            .ok_or(TableError::NotFound(table_id))?;
        handle.dispatch(action).await
    }

    /// Returns info about a specific table.
    pub async fn table_info(&self, table_id: TableId) -> Result<TableInfo, TableError> {
        let handle = self
            .tables
            .get(&table_id)
            .ok_or(TableError::NotFound(table_id))?;
        handle.info().await
    }

    /// Shuts down a table and forgets it.
    pub async fn destroy_table(&mut self, table_id: TableId) -> Result<(), TableError> {
        let handle = self
            .tables
            .remove(&table_id)
            .ok_or(TableError::NotFound(table_id))?;

        let _ = handle.shutdown().await;

        tracing::info!(%table_id, "table destroyed");
        Ok(())
    }

    /// Lists every table whose game is still being played, ordered by ID.
    ///
    /// Tables that fail to respond (e.g., shutting down) are silently
    /// skipped.
    pub async fn list_tables(&self) -> Vec<TableInfo> {
        let mut infos = Vec::with_capacity(self.tables.len());
        for handle in self.tables.values() {
            if let Ok(info) = handle.info().await {
                if info.status.is_active() {
                    infos.push(info);
                }
            }
        }
        infos.sort_by_key(|info| info.table_id);
        infos
    }

    /// Returns the number of open tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Lists all open table IDs.
    pub fn table_ids(&self) -> Vec<TableId> {
        self.tables.keys().copied().collect()
    }
}

impl Default for TableManager {
    fn default() -> Self {
        Self::new()
    }
}
