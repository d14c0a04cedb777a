use anyhow::anyhow;
use clap::Parser;
use favreel::api::ApiClient;
use favreel::cli::{run_command, Cli, Command};
use favreel::config::Config;
use favreel::list::EntryList;
use favreel::logging::{init_tracing, LogMode};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_overrides(Config::env_api_url(), cli.api_url.clone())?;

    let command = cli.command.unwrap_or(Command::Browse);
    let mode = match command {
        Command::Browse => LogMode::Tui,
        _ => LogMode::Cli,
    };
    init_tracing(mode);
    tracing::info!(base_url = %config.api.base_url, "favreel starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to start async runtime: {}", e))?;

    if command == Command::Browse {
        favreel::ui::run(&config, runtime.handle())?;
        return Ok(());
    }

    let client = ApiClient::new(&config.api)
        .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;
    let list = EntryList::with_page_size(client, command.page_size(config.api.page_size));
    let mut stdout = std::io::stdout().lock();
    runtime.block_on(run_command(command, &list, &mut stdout))
}
