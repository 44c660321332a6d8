use crate::api::client::BackendClient;
use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub paths: AppPaths,
    pub settings: Settings,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(profile: String, json: bool) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile);
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &profile)?;
        let output = Output::new(json);

        Ok(Self {
            profile,
            paths,
            settings,
            output,
        })
    }

    /// Builds the backend client on demand so commands that do not touch
    /// the backend (`config set` on a fresh install) work unconfigured.
    pub fn backend(&self) -> AppResult<BackendClient> {
        Ok(BackendClient::new(
            self.settings.backend_url()?,
            self.settings.api_key()?,
        ))
    }
}
