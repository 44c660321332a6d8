use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "typist", version, about = "Typing test profile viewer")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Settings profile to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    User(UserArgs),
    Resolve(ResolveArgs),
    Stats(StatsArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct UserArgs {
    #[arg(help = "Canonical user id or display handle")]
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[arg(help = "Canonical user id or display handle")]
    pub token: String,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(help = "Canonical user id or display handle")]
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Set(ConfigSetArgs),
    Show,
}

#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    #[arg(long, help = "Backend base URL")]
    pub backend_url: Option<String>,
    #[arg(long, help = "Backend API key")]
    pub api_key: Option<String>,
}
