use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::error::SessionError;
use connect_four::ui::{menu, IoConsole};

/// Play Connect Four against a friend in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Resume the game stored in this save file
    #[arg(long)]
    load: Option<PathBuf>,

    /// Colour the tokens, regardless of the config file
    #[arg(long)]
    color: bool,

    /// Print a config file with every default value and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.color {
        config.display.color = true;
    }

    let mut console = IoConsole::stdio();
    match menu::run(&mut console, &config, cli.load) {
        // Ctrl-D at a prompt ends the program like choosing to quit.
        Ok(()) | Err(SessionError::InputClosed) => Ok(()),
        Err(err) => Err(err).context("running the game"),
    }
}

/// Log to stderr so the game itself owns stdout. `RUST_LOG` overrides the
/// default `warn` level.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
