use std::sync::atomic::{AtomicUsize, Ordering};

use typist::api::models::CachedUser;
use typist::error::{AppError, AppResult};
use typist::resolve::{self, NameLookup};
use uuid::Uuid;

struct StubLookup {
    user: Option<CachedUser>,
    calls: AtomicUsize,
}

impl StubLookup {
    fn returning(user: Option<CachedUser>) -> Self {
        Self {
            user,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl NameLookup for StubLookup {
    async fn user_by_name(&self, _name: &str) -> AppResult<Option<CachedUser>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.user.clone())
    }
}

fn cached_user(id: Uuid, name: &str) -> CachedUser {
    CachedUser {
        id,
        name: name.to_string(),
        avatar_url: None,
        banner_url: None,
        avatar_shape: None,
    }
}

#[tokio::test]
async fn canonical_token_skips_the_lookup() {
    let lookup = StubLookup::returning(None);

    let id = resolve::resolve(&lookup, "123e4567-e89b-12d3-a456-426614174000")
        .await
        .expect("canonical token should resolve");

    assert_eq!(id.to_string(), "123e4567-e89b-12d3-a456-426614174000");
    assert_eq!(lookup.calls(), 0);
}

#[tokio::test]
async fn handle_resolves_through_exactly_one_lookup() {
    let id = Uuid::new_v4();
    let lookup = StubLookup::returning(Some(cached_user(id, "speedy_typer")));

    let resolved = resolve::resolve(&lookup, "speedy_typer")
        .await
        .expect("known handle should resolve");

    assert_eq!(resolved, id);
    assert_eq!(lookup.calls(), 1);
}

#[tokio::test]
async fn unknown_handle_is_not_found() {
    let lookup = StubLookup::returning(None);

    let result = resolve::resolve(&lookup, "ghost_user").await;

    assert!(matches!(result, Err(AppError::NotFound)));
    assert_eq!(lookup.calls(), 1);
}

#[tokio::test]
async fn empty_token_fails_before_any_lookup() {
    let lookup = StubLookup::returning(Some(cached_user(Uuid::new_v4(), "anyone")));

    let result = resolve::resolve(&lookup, "").await;

    assert!(matches!(result, Err(AppError::NotFound)));
    assert_eq!(lookup.calls(), 0);
}

#[tokio::test]
async fn uppercase_id_is_treated_as_a_handle() {
    let id = Uuid::new_v4();
    let lookup = StubLookup::returning(Some(cached_user(id, "123E4567")));

    let resolved = resolve::resolve(&lookup, "123E4567-E89B-12D3-A456-426614174000")
        .await
        .expect("lookup should supply the id");

    assert_eq!(resolved, id);
    assert_eq!(lookup.calls(), 1);
}
