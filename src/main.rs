use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use stork_results::api::create_router;
use stork_results::config::CONFIG;
use stork_results::renderer::render_output_file;

#[derive(Parser)]
#[command(name = "stork-results", about = "Render search results as HTML list items")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the render API over HTTP
    Serve,
    /// Render a search output JSON file to stdout
    Render {
        file: PathBuf,
        /// Index of the result to mark as selected
        #[arg(long)]
        selected: Option<usize>,
        #[arg(long)]
        show_scores: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve => serve().await,
        Command::Render {
            file,
            selected,
            show_scores,
        } => render(&file, selected, show_scores),
    }
}

async fn serve() -> anyhow::Result<()> {
    let app = create_router(&CONFIG.static_dir);
    let listener = tokio::net::TcpListener::bind(&CONFIG.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", CONFIG.bind_addr))?;
    tracing::info!(addr = %CONFIG.bind_addr, static_dir = %CONFIG.static_dir, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn render(file: &Path, selected: Option<usize>, show_scores: bool) -> anyhow::Result<()> {
    let html = render_output_file(file, selected, show_scores)?;
    println!("{}", html);
    Ok(())
}
