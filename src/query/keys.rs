use serde_json::{Value, json};
use uuid::Uuid;

/// Identity and placement of a single query in the transferable cache.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Array-form query key, e.g. `["user", "<uuid>"]`.
    pub key: Value,
    /// True for queries executed during server-side assembly. Only these
    /// end up in the dehydrated snapshot.
    pub server: bool,
}

impl QueryOptions {
    pub fn cache_key(&self) -> String {
        self.key.to_string()
    }
}

pub fn user_by_id(id: Uuid, server: bool) -> QueryOptions {
    QueryOptions {
        key: json!(["user", id]),
        server,
    }
}

pub fn user_stats_by_id(id: Uuid, server: bool) -> QueryOptions {
    QueryOptions {
        key: json!(["user-stats", id]),
        server,
    }
}

pub fn personal_bests_by_id(id: Uuid, server: bool) -> QueryOptions {
    QueryOptions {
        key: json!(["personal-bests", id]),
        server,
    }
}
