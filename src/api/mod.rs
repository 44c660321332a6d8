pub mod client;
pub mod models;
pub mod users;

pub use client::BackendClient;
pub use models::{AvatarShape, CachedUser, UserRecord, UserStats};
