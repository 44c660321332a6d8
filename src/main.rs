use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = typist::cli::Cli::parse();

    if let Err(err) = typist::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
