use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full user row as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "avatarURL", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(rename = "bannerURL", default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(rename = "avatarShape", default, skip_serializing_if = "Option::is_none")]
    pub avatar_shape: Option<AvatarShape>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarShape {
    Circle,
    Rect,
}

/// Projection returned by the name lookup. Only `id` is authoritative;
/// the remaining fields are a convenience copy and may lag the full record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedUser {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "avatarURL", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(rename = "bannerURL", default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(rename = "avatarShape", default, skip_serializing_if = "Option::is_none")]
    pub avatar_shape: Option<AvatarShape>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub started_tests: u64,
    pub completed_tests: u64,
    /// Seconds spent typing across all tests.
    pub time_typing: u64,
}
