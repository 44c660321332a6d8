use uuid::Uuid;

const USER_SELECT: &str = "id,name,avatarURL,bannerURL,avatarShape";
const STATS_SELECT: &str = "startedTests,completedTests,timeTyping";

pub fn users_endpoint() -> &'static str {
    "/rest/v1/users"
}

pub fn user_stats_endpoint() -> &'static str {
    "/rest/v1/user_stats"
}

pub fn personal_bests_endpoint() -> &'static str {
    "/rest/v1/personal_bests"
}

pub fn user_by_id_query(id: &Uuid) -> Vec<(String, String)> {
    vec![
        ("id".to_string(), format!("eq.{id}")),
        ("select".to_string(), USER_SELECT.to_string()),
    ]
}

pub fn user_by_name_query(name: &str) -> Vec<(String, String)> {
    vec![
        ("name".to_string(), format!("eq.{name}")),
        ("select".to_string(), USER_SELECT.to_string()),
    ]
}

pub fn stats_by_user_query(id: &Uuid) -> Vec<(String, String)> {
    vec![
        ("userId".to_string(), format!("eq.{id}")),
        ("select".to_string(), STATS_SELECT.to_string()),
    ]
}

pub fn personal_bests_by_user_query(id: &Uuid) -> Vec<(String, String)> {
    vec![
        ("userId".to_string(), format!("eq.{id}")),
        ("select".to_string(), "*".to_string()),
    ]
}
