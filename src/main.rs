use anyhow::{Context, Result};
use clap::Parser;
use todo::application::todo_service::TodoServiceImpl;
use todo::cli::{self, Cli, prompt::TerminalPrompt};
use todo::config::Config;
use todo::infrastructure::json_repo::JsonTodoRepository;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(path) = opts.list.clone() {
        config = config.with_list_path(path);
    }
    config.prepare()?;
    tracing::debug!(path = %config.list_path.display(), cleanup = %config.cleanup, "resolved list");

    let repo = JsonTodoRepository::open_with_policy(&config.list_path, config.cleanup)
        .with_context(|| format!("unable to open list at {}", config.list_path.display()))?;
    let mut service = TodoServiceImpl::new(repo);

    let stdout = std::io::stdout();
    cli::run(opts.into_command(), &mut service, &mut TerminalPrompt::default(), &mut stdout.lock())
        .with_context(|| format!("unable to execute {args:?}"))
}
