use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use teambuilder::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "teambuilder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Echo rendered prompts instead of calling the generation service
    #[arg(long, global = true)]
    mock: bool,

    /// Model identifier (overrides ANTHROPIC_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Service base URL (overrides ANTHROPIC_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        mock: cli.mock,
        model: cli.model,
        base_url: cli.base_url,
    });
    let router = Router::new(&container);

    match router.route(cli.command).await {
        Ok(output) => {
            write_output(&mut std::io::stdout(), &output)?;
            Ok(())
        }
        Err(e) => {
            // Only the top-level message; the cause was already logged.
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Generated text is passed through byte for byte, with no trailing newline.
fn write_output(out: &mut impl Write, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}
