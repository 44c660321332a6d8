use uuid::Uuid;

/// Placeholder section the client fills with its own personal-bests query.
/// Keyed by the canonical id so the client query matches the prefetched
/// snapshot entry instead of refetching.
pub fn render(user_id: Uuid) -> String {
    format!("<section class=\"personal-bests\" data-user-id=\"{user_id}\"></section>\n")
}
