pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;

use std::env;

use crate::error::AppResult;

const BACKEND_URL_ENV: &str = "TYPIST_BACKEND_URL";
const API_KEY_ENV: &str = "TYPIST_API_KEY";

pub fn resolve_profile(requested: &str) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return "default".to_string();
    }

    trimmed.to_string()
}

pub fn load_settings(paths: &AppPaths, profile: &str) -> AppResult<Settings> {
    let mut settings = settings::load(paths.settings_file(profile))?;

    if let Ok(value) = env::var(BACKEND_URL_ENV) {
        settings.backend_url = Some(value);
    }
    if let Ok(value) = env::var(API_KEY_ENV) {
        settings.api_key = Some(value);
    }

    Ok(settings)
}

pub fn save_settings(paths: &AppPaths, profile: &str, settings: &Settings) -> AppResult<()> {
    settings::save(paths.settings_file(profile), settings)
}
