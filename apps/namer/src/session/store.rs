//! In-memory session registry. Nothing is persisted; dropping a session drops its list.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::session::entries::EntryList;

/// One editing session: the entry list plus the last program name used.
#[derive(Debug, Clone)]
pub struct Session {
    pub entries: EntryList,
    /// Raw program name from the most recent successful add.
    pub program_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            entries: EntryList::default(),
            program_name: None,
            created_at: Utc::now(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

/// Cloneable handle shared through `AppState`.
///
/// Sessions live until the form discards them. There is no expiry sweep, so a
/// client that never calls discard leaves its session in memory until restart.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, Session::new());
        id
    }

    /// Returns false if the session did not exist.
    pub async fn discard(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    pub async fn read<R>(&self, id: Uuid, f: impl FnOnce(&Session) -> R) -> Option<R> {
        self.inner.read().await.get(&id).map(f)
    }

    pub async fn write<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.inner.write().await.get_mut(&id).map(f)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
