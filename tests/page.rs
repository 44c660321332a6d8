use serde_json::{Value, json};
use typist::api::models::{AvatarShape, CachedUser, UserRecord, UserStats};
use typist::error::{AppError, AppResult};
use typist::page::{self, ProfileSource};
use typist::query;
use typist::resolve::NameLookup;
use uuid::Uuid;

#[derive(Clone)]
struct StubSource {
    known_name: Option<(String, Uuid)>,
    user: Option<UserRecord>,
    stats: Option<UserStats>,
    bests: Result<Vec<Value>, String>,
}

impl StubSource {
    fn with_user(user: UserRecord) -> Self {
        Self {
            known_name: None,
            user: Some(user),
            stats: None,
            bests: Ok(vec![]),
        }
    }
}

impl NameLookup for StubSource {
    async fn user_by_name(&self, name: &str) -> AppResult<Option<CachedUser>> {
        Ok(self
            .known_name
            .as_ref()
            .filter(|(known, _)| known == name)
            .map(|(known, id)| CachedUser {
                id: *id,
                name: known.clone(),
                avatar_url: None,
                banner_url: None,
                avatar_shape: None,
            }))
    }
}

impl ProfileSource for StubSource {
    async fn user_by_id(&self, _id: Uuid) -> AppResult<Option<UserRecord>> {
        Ok(self.user.clone())
    }

    async fn stats_by_id(&self, _id: Uuid) -> AppResult<Option<UserStats>> {
        Ok(self.stats)
    }

    async fn personal_bests_by_id(&self, _id: Uuid) -> AppResult<Vec<Value>> {
        match &self.bests {
            Ok(rows) => Ok(rows.clone()),
            Err(message) => Err(AppError::Api(message.clone())),
        }
    }
}

fn sample_user(id: Uuid) -> UserRecord {
    UserRecord {
        id,
        name: "speedy_typer".to_string(),
        avatar_url: Some("https://x/avatar.png".to_string()),
        banner_url: Some("https://x/banner.png".to_string()),
        avatar_shape: Some(AvatarShape::Circle),
    }
}

#[tokio::test]
async fn missing_user_row_is_not_found_even_for_a_resolved_id() {
    let id = Uuid::new_v4();
    let source = StubSource {
        known_name: None,
        user: None,
        stats: Some(UserStats::default()),
        bests: Ok(vec![]),
    };

    let result = page::assemble(&source, &id.to_string()).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn absent_stats_render_as_zeros() {
    let id = Uuid::new_v4();
    let source = StubSource::with_user(sample_user(id));

    let page = page::assemble(&source, &id.to_string())
        .await
        .expect("page should assemble");

    assert_eq!(page.stats.started_tests, 0);
    assert_eq!(page.stats.completed_tests, 0);
    assert_eq!(page.stats.time_typing, 0);
    assert!(page.html.contains("<dt>started tests</dt><dd>0</dd>"));
    assert!(page.html.contains("<dt>time typing</dt><dd>0s</dd>"));
}

#[tokio::test]
async fn snapshot_covers_all_three_queries() {
    let id = Uuid::new_v4();
    let bests = vec![json!({"mode": "time 60", "wpm": 132})];
    let mut source = StubSource::with_user(sample_user(id));
    source.stats = Some(UserStats {
        started_tests: 10,
        completed_tests: 8,
        time_typing: 900,
    });
    source.bests = Ok(bests.clone());

    let page = page::assemble(&source, &id.to_string())
        .await
        .expect("page should assemble");

    assert_eq!(page.state.len(), 3);
    assert_eq!(
        page.state.get(&json!(["personal-bests", id])),
        Some(&json!(bests))
    );
    let user_entry = page
        .state
        .get(&json!(["user", id]))
        .expect("user query in snapshot");
    assert_eq!(user_entry["name"], "speedy_typer");
    let stats_entry = page
        .state
        .get(&json!(["user-stats", id]))
        .expect("stats query in snapshot");
    assert_eq!(stats_entry["startedTests"], 10);
}

#[tokio::test]
async fn failed_prefetch_keeps_the_page_and_drops_the_entry() {
    let id = Uuid::new_v4();
    let mut source = StubSource::with_user(sample_user(id));
    source.bests = Err("bests backend down".to_string());

    let page = page::assemble(&source, &id.to_string())
        .await
        .expect("page should assemble despite prefetch failure");

    assert_eq!(page.state.len(), 2);
    assert!(page.state.get(&json!(["personal-bests", id])).is_none());
}

#[tokio::test]
async fn handle_token_assembles_after_lookup() {
    let id = Uuid::new_v4();
    let mut source = StubSource::with_user(sample_user(id));
    source.known_name = Some(("speedy_typer".to_string(), id));

    let page = page::assemble(&source, "speedy_typer")
        .await
        .expect("page should assemble");

    assert_eq!(page.user.id, id);
    assert!(page.html.contains(&format!("data-user-id=\"{id}\"")));
    assert!(page.html.contains("data-hydration-state"));
}

#[tokio::test]
async fn unknown_handle_never_renders() {
    let source = StubSource {
        known_name: None,
        user: Some(sample_user(Uuid::new_v4())),
        stats: None,
        bests: Ok(vec![]),
    };

    let result = page::assemble(&source, "ghost_user").await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn query_keys_match_the_canonical_form() {
    let id = Uuid::new_v4();
    let options = query::keys::personal_bests_by_id(id, true);
    assert_eq!(options.key, json!(["personal-bests", id]));
}
