use std::future::Future;

use uuid::Uuid;

use crate::api::models::CachedUser;
use crate::error::{AppError, AppResult};

/// A route token as it arrives from the outside: either the backend's
/// canonical user id or a human-chosen display handle. Classified exactly
/// once at the boundary; everything past this point works with `Uuid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteToken {
    Canonical(Uuid),
    Handle(String),
}

impl RouteToken {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::NotFound);
        }

        match parse_canonical(raw) {
            Some(id) => Ok(RouteToken::Canonical(id)),
            None => Ok(RouteToken::Handle(raw.to_string())),
        }
    }
}

/// Accepts only the strict hyphenated lowercase 8-4-4-4-12 form. Tokens the
/// uuid crate would still parse (uppercase, braces, urn prefix) stay handles.
fn parse_canonical(raw: &str) -> Option<Uuid> {
    let id = Uuid::try_parse(raw).ok()?;
    if id.as_hyphenated().to_string() == raw {
        Some(id)
    } else {
        None
    }
}

/// Cached handle-to-user lookup seam, implemented by the backend client.
pub trait NameLookup {
    fn user_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = AppResult<Option<CachedUser>>> + Send;
}

/// Resolves a route token to the canonical user id. Canonical tokens skip
/// the lookup entirely; handles go through it exactly once.
pub async fn resolve<L: NameLookup + Sync>(lookup: &L, raw: &str) -> AppResult<Uuid> {
    match RouteToken::parse(raw)? {
        RouteToken::Canonical(id) => Ok(id),
        RouteToken::Handle(name) => {
            let user = lookup.user_by_name(&name).await?;
            user.map(|user| user.id).ok_or(AppError::NotFound)
        }
    }
}
