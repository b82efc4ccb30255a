use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use sankey_flow::{
    dataset, exporter::DiagramExporter, normalize, parse_tsv, remote,
    renderer::SankeyGraphRenderer, SankeyGraph,
};
use std::{fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A command-line pipeline that prepares Sankey diagram data for the web
/// renderer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a tab-separated flow dataset. The built-in plastic
    /// production dataset is used when omitted.
    path: Option<PathBuf>,

    /// Load an already-normalized graph from a remote JSON document
    /// instead of a local dataset.
    #[arg(long)]
    remote_url: Option<String>,

    /// Directory the renderer-ready JSON is written to.
    #[arg(long, default_value = "out")]
    output: PathBuf,

    /// Also print the graph as an ASCII tree.
    #[arg(long)]
    tree: bool,
}

/// Initializes the tracing subscriber, honoring `RUST_LOG` when set.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn load_graph(cli: &Cli) -> Result<SankeyGraph> {
    if let Some(url) = &cli.remote_url {
        return remote::fetch_graph(url)
            .await
            .context("failed to load remote dataset");
    }

    let records = match &cli.path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parse_tsv(&raw).context("failed to parse flow dataset")?
        }
        None => {
            info!("no dataset given, using the built-in plastic production flows");
            dataset::plastic_waste_flows()?
        }
    };

    normalize(&records).context("failed to normalize flow records")
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let graph = load_graph(&cli).await?;

    let exporter = DiagramExporter::new(cli.output.clone());
    let written = exporter
        .export(&graph)
        .context("failed to export sankey data")?;

    println!(
        "Wrote {} nodes and {} links to {}",
        graph.nodes.len(),
        graph.links.len(),
        written.display()
    );

    if cli.tree {
        println!("{}", graph.render_as_ascii_tree());
    }

    Ok(())
}
