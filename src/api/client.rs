use std::fmt;

use moka::future::Cache;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::page::ProfileSource;
use crate::resolve::NameLookup;

use super::models::{CachedUser, UserRecord, UserStats};
use super::users;

const NAME_CACHE_CAPACITY: u64 = 256;

#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    api_key: String,
    name_cache: Cache<String, CachedUser>,
}

impl BackendClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            name_cache: Cache::new(NAME_CACHE_CAPACITY),
        }
    }

    pub async fn fetch_user_by_id(&self, id: &Uuid) -> AppResult<Option<UserRecord>> {
        let rows: Vec<UserRecord> = self
            .get_json(users::users_endpoint(), Some(&users::user_by_id_query(id)))
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Handle lookup backed by an in-process cache. Only the `id` of the
    /// returned projection is authoritative.
    pub async fn fetch_user_by_name(&self, name: &str) -> AppResult<Option<CachedUser>> {
        if let Some(hit) = self.name_cache.get(name).await {
            return Ok(Some(hit));
        }

        let rows: Vec<CachedUser> = self
            .get_json(
                users::users_endpoint(),
                Some(&users::user_by_name_query(name)),
            )
            .await?;
        let user = rows.into_iter().next();

        if let Some(user) = &user {
            self.name_cache.insert(name.to_string(), user.clone()).await;
        }

        Ok(user)
    }

    pub async fn fetch_stats_by_id(&self, id: &Uuid) -> AppResult<Option<UserStats>> {
        let rows: Vec<UserStats> = self
            .get_json(
                users::user_stats_endpoint(),
                Some(&users::stats_by_user_query(id)),
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Personal-bests rows are opaque here; they are only prefetched for
    /// the transferable snapshot.
    pub async fn fetch_personal_bests_by_id(&self, id: &Uuid) -> AppResult<Vec<Value>> {
        self.get_json(
            users::personal_bests_endpoint(),
            Some(&users::personal_bests_by_user_query(id)),
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Option<&[(String, String)]>,
    ) -> AppResult<T> {
        let url = self.endpoint_url(endpoint)?;
        let mut request = self
            .http
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        self.parse_json_response(response).await
    }

    fn endpoint_url(&self, endpoint: &str) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.set_path(endpoint.trim_start_matches('/'));
        Ok(url)
    }

    async fn parse_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_api_error(status, &body))
    }
}

impl fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl NameLookup for BackendClient {
    async fn user_by_name(&self, name: &str) -> AppResult<Option<CachedUser>> {
        self.fetch_user_by_name(name).await
    }
}

impl ProfileSource for BackendClient {
    async fn user_by_id(&self, id: Uuid) -> AppResult<Option<UserRecord>> {
        self.fetch_user_by_id(&id).await
    }

    async fn stats_by_id(&self, id: Uuid) -> AppResult<Option<UserStats>> {
        self.fetch_stats_by_id(&id).await
    }

    async fn personal_bests_by_id(&self, id: Uuid) -> AppResult<Vec<Value>> {
        self.fetch_personal_bests_by_id(&id).await
    }
}

#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    message: Option<String>,
    code: Option<String>,
    hint: Option<String>,
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    let message = parse_api_error_message(body).unwrap_or_else(|| {
        let body = body.trim();
        if body.is_empty() {
            "no error details in response body".to_string()
        } else {
            body.to_string()
        }
    });

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return AppError::Auth(format!(
            "backend rejected the api key ({status}): {message}. check your profile settings"
        ));
    }

    AppError::Api(format!("backend request failed ({status}): {message}"))
}

fn parse_api_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<BackendErrorBody>(body).ok()?;
    let mut parts = Vec::new();

    if let Some(message) = parsed.message {
        parts.push(message);
    }

    if let Some(code) = parsed.code {
        parts.push(format!("code={code}"));
    }

    if let Some(hint) = parsed.hint {
        parts.push(format!("hint={hint}"));
    }

    if parts.is_empty() {
        return None;
    }

    Some(parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_url_from_base() {
        let client = BackendClient::new("https://example.supabase.co", "anon-key");
        let url = client
            .endpoint_url(users::users_endpoint())
            .expect("url should build");
        assert_eq!(url.as_str(), "https://example.supabase.co/rest/v1/users");
    }

    #[test]
    fn maps_unauthorized_as_auth_error() {
        let error = map_api_error(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Invalid API key","hint":"Double check your anon key."}"#,
        );

        match error {
            AppError::Auth(message) => {
                assert!(message.contains("Invalid API key"));
                assert!(message.contains("hint=Double check your anon key."));
            }
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[test]
    fn maps_other_failures_as_api_errors() {
        let error = map_api_error(
            StatusCode::BAD_REQUEST,
            r#"{"message":"column users.nam does not exist","code":"42703"}"#,
        );

        match error {
            AppError::Api(message) => {
                assert!(message.contains("column users.nam does not exist"));
                assert!(message.contains("code=42703"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_raw_body_when_envelope_is_absent() {
        let error = map_api_error(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded");

        match error {
            AppError::Api(message) => assert!(message.contains("upstream exploded")),
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
