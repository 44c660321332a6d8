pub mod banner;
pub mod details;
pub mod personal_bests;

use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::api::models::{UserRecord, UserStats};
use crate::error::{AppError, AppResult};
use crate::query::{DehydratedState, QueryCache, keys};
use crate::resolve::{self, NameLookup};

/// Data operations the profile page needs from the backend.
pub trait ProfileSource: NameLookup {
    fn user_by_id(&self, id: Uuid) -> impl Future<Output = AppResult<Option<UserRecord>>> + Send;
    fn stats_by_id(&self, id: Uuid) -> impl Future<Output = AppResult<Option<UserStats>>> + Send;
    fn personal_bests_by_id(&self, id: Uuid) -> impl Future<Output = AppResult<Vec<Value>>> + Send;
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePage {
    pub user: UserRecord,
    pub stats: UserStats,
    pub state: DehydratedState,
    pub html: String,
}

/// Assembles the profile page for a route token: resolve, fetch, snapshot,
/// render. Fails with NotFound before any view output when the token does
/// not lead to an existing user.
pub async fn assemble<S>(source: &S, token: &str) -> AppResult<ProfilePage>
where
    S: ProfileSource + Clone + Send + Sync + 'static,
{
    let user_id = resolve::resolve(source, token).await?;

    let mut cache = QueryCache::new();

    // Started before the awaited pair so its result lands in the snapshot;
    // the personal-bests view fetches it itself on hydration miss.
    {
        let source = source.clone();
        cache.prefetch_query(keys::personal_bests_by_id(user_id, true), async move {
            source.personal_bests_by_id(user_id).await
        });
    }

    let user_key = keys::user_by_id(user_id, true);
    let stats_key = keys::user_stats_by_id(user_id, true);
    let (user, stats) = tokio::try_join!(
        cache.fetch_query(&user_key, source.user_by_id(user_id)),
        cache.fetch_query(&stats_key, source.stats_by_id(user_id)),
    )?;

    // A resolvable id is no guarantee the row still exists.
    let user = user.ok_or(AppError::NotFound)?;
    let stats = stats.unwrap_or_default();

    let state = cache.dehydrate().await;
    let html = render_page(&user, &stats, user_id, &state)?;

    Ok(ProfilePage {
        user,
        stats,
        state,
        html,
    })
}

/// Renders the full page fragment: hydration snapshot, details view,
/// personal-bests section.
pub fn render_page(
    user: &UserRecord,
    stats: &UserStats,
    user_id: Uuid,
    state: &DehydratedState,
) -> AppResult<String> {
    // `<` is escaped so the embedded JSON can never close the script tag.
    let state_json = serde_json::to_string(state)?.replace('<', "\\u003c");

    let mut out = String::new();
    out.push_str("<main class=\"profile-page\">\n");
    out.push_str(&format!(
        "<script type=\"application/json\" data-hydration-state>{state_json}</script>\n"
    ));
    out.push_str(&details::render(user, stats));
    out.push_str(&personal_bests::render(user_id));
    out.push_str("</main>\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user(id: Uuid) -> UserRecord {
        UserRecord {
            id,
            name: "speedy_typer".to_string(),
            avatar_url: None,
            banner_url: None,
            avatar_shape: None,
        }
    }

    #[test]
    fn page_contains_hydration_script_and_sections() {
        let id = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").expect("valid uuid");
        let state = DehydratedState { queries: vec![] };

        let html = render_page(&sample_user(id), &UserStats::default(), id, &state)
            .expect("render should succeed");
        assert!(html.contains("data-hydration-state"));
        assert!(html.contains("class=\"user-details\""));
        assert!(html.contains(&format!("data-user-id=\"{id}\"")));
    }

    #[test]
    fn hydration_json_cannot_close_the_script_tag() {
        let id = Uuid::new_v4();
        let state = DehydratedState {
            queries: vec![crate::query::DehydratedQuery {
                query_key: json!(["user", id]),
                data: json!({"name": "</script><b>x"}),
            }],
        };

        let html = render_page(&sample_user(id), &UserStats::default(), id, &state)
            .expect("render should succeed");
        let script = html
            .split("data-hydration-state>")
            .nth(1)
            .and_then(|rest| rest.split("</script>").next())
            .expect("script payload present");
        assert!(!script.contains('<'));
        assert!(script.contains("\\u003c/script>"));
    }
}
