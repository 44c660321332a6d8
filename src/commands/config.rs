use crate::cli::{ConfigCommand, ConfigSetArgs};
use crate::config::{self, Settings};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

pub async fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Set(args) => set(ctx, args),
        ConfigCommand::Show => show(ctx),
    }
}

fn set(ctx: &AppContext, args: ConfigSetArgs) -> AppResult<()> {
    if args.backend_url.is_none() && args.api_key.is_none() {
        return Err(AppError::Config(
            "nothing to set; pass --backend-url and/or --api-key".to_string(),
        ));
    }

    let settings = merge_settings(&ctx.settings, args);
    config::save_settings(&ctx.paths, &ctx.profile, &settings)?;

    let text = format!("settings saved for profile `{}`", ctx.profile);
    ctx.output.emit(&text, &settings)
}

fn show(ctx: &AppContext) -> AppResult<()> {
    let text = format!(
        "backend_url: {}\napi_key: {}",
        ctx.settings.backend_url.as_deref().unwrap_or("(unset)"),
        if ctx.settings.api_key.is_some() {
            "(set)"
        } else {
            "(unset)"
        },
    );
    ctx.output.emit(&text, &ctx.settings)
}

fn merge_settings(current: &Settings, args: ConfigSetArgs) -> Settings {
    let mut settings = current.clone();
    if let Some(url) = args.backend_url {
        settings.backend_url = Some(url);
    }
    if let Some(key) = args.api_key {
        settings.api_key = Some(key);
    }
    settings
}
