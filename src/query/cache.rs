use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::task::JoinSet;

use super::keys::QueryOptions;
use crate::error::AppResult;

#[derive(Debug, Clone)]
struct QueryEntry {
    key: Value,
    data: Value,
    server: bool,
}

/// Per-request transferable query cache. The server-side assembler writes
/// it once; `dehydrate` turns it into the snapshot the client-side
/// restoration boundary reads.
#[derive(Debug)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<String, QueryEntry>>>,
    pending: JoinSet<()>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            pending: JoinSet::new(),
        }
    }

    /// Awaits the fetch, records its result under the query key, and hands
    /// the value back to the caller.
    pub async fn fetch_query<T, F>(&self, options: &QueryOptions, fut: F) -> AppResult<T>
    where
        T: Serialize,
        F: Future<Output = AppResult<T>>,
    {
        let value = fut.await?;
        let data = serde_json::to_value(&value)?;
        insert_entry(&self.entries, options, data);
        Ok(value)
    }

    /// Starts the fetch without blocking on it. A successful result lands
    /// in the cache for the snapshot; a failure is logged and dropped, and
    /// the client refetches on hydration miss.
    pub fn prefetch_query<T, F>(&mut self, options: QueryOptions, fut: F)
    where
        T: Serialize + Send + 'static,
        F: Future<Output = AppResult<T>> + Send + 'static,
    {
        let entries = Arc::clone(&self.entries);
        self.pending.spawn(async move {
            match fut.await {
                Ok(value) => match serde_json::to_value(&value) {
                    Ok(data) => insert_entry(&entries, &options, data),
                    Err(err) => {
                        tracing::warn!(key = %options.cache_key(), "prefetch result not serializable: {err}");
                    }
                },
                Err(err) => {
                    tracing::warn!(key = %options.cache_key(), "prefetch failed: {err}");
                }
            }
        });
    }

    /// Consumes the cache into a transferable snapshot. Outstanding
    /// prefetches are drained first so an in-flight fetch is captured once
    /// it settles.
    pub async fn dehydrate(mut self) -> DehydratedState {
        while let Some(joined) = self.pending.join_next().await {
            if let Err(err) = joined {
                tracing::warn!("prefetch task aborted: {err}");
            }
        }

        let map = lock_entries(&self.entries);
        let mut queries: Vec<DehydratedQuery> = map
            .values()
            .filter(|entry| entry.server)
            .map(|entry| DehydratedQuery {
                query_key: entry.key.clone(),
                data: entry.data.clone(),
            })
            .collect();
        queries.sort_by_key(|query| query.query_key.to_string());

        DehydratedState { queries }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_entry(entries: &Mutex<HashMap<String, QueryEntry>>, options: &QueryOptions, data: Value) {
    let mut map = lock_entries(entries);
    map.insert(
        options.cache_key(),
        QueryEntry {
            key: options.key.clone(),
            data,
            server: options.server,
        },
    );
}

fn lock_entries(
    entries: &Mutex<HashMap<String, QueryEntry>>,
) -> MutexGuard<'_, HashMap<String, QueryEntry>> {
    match entries.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Snapshot of completed query results, ordered by key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DehydratedState {
    pub queries: Vec<DehydratedQuery>,
}

impl DehydratedState {
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.queries
            .iter()
            .find(|query| &query.query_key == key)
            .map(|query| &query.data)
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DehydratedQuery {
    #[serde(rename = "queryKey")]
    pub query_key: Value,
    pub data: Value,
}
