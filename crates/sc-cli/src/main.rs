mod render;
mod server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmcp::{ServiceExt, transport::stdio};
use sc_core::{Catalog, CompositionRequest, SearchFilters, compose, search};

use render::Format;

#[derive(Parser)]
#[command(name = "sc", about = "Constellation composition engine CLI and MCP server")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server on stdio transport
    Serve,

    /// Derive composition guidance for one constellation
    Compose {
        /// Constellation name or IAU abbreviation
        name: String,

        /// Canvas width in pixels (512-4096)
        #[arg(long, default_value_t = 1024)]
        width: u32,

        /// Canvas height in pixels (512-4096)
        #[arg(long, default_value_t = 1024)]
        height: u32,

        /// Omit mythology themes from the result
        #[arg(long)]
        no_mythology: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Search the catalog by text and filters
    Search {
        /// Free-text query over name, story, themes, and visual character
        query: Option<String>,

        /// Filter by theme keyword substring
        #[arg(long)]
        theme: Option<String>,

        /// Filter by shape class (hunter, animal, figure, geometric)
        #[arg(long)]
        shape: Option<String>,

        /// Filter by brightness tier (faint, moderate, bright, or "moderate+")
        #[arg(long)]
        brightness: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
    },

    /// List all constellations
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = Catalog::builtin();

    match cli.command {
        Commands::Serve => cmd_serve(catalog).await,
        Commands::Compose {
            name,
            width,
            height,
            no_mythology,
            format,
        } => cmd_compose(&catalog, &name, width, height, !no_mythology, format),
        Commands::Search {
            query,
            theme,
            shape,
            brightness,
            format,
        } => cmd_search(&catalog, query.as_deref(), theme, shape, brightness, format),
        Commands::List { format } => cmd_list(&catalog, format),
    }
}

async fn cmd_serve(catalog: Catalog) -> Result<()> {
    tracing::info!("starting MCP server with {} constellations", catalog.len());

    let server = server::SkyServer::new(catalog);
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await?;
    Ok(())
}

fn cmd_compose(
    catalog: &Catalog,
    name: &str,
    width: u32,
    height: u32,
    include_mythology: bool,
    format: Format,
) -> Result<()> {
    let record = catalog.lookup(name)?;
    let request = CompositionRequest {
        canvas_width: width,
        canvas_height: height,
        include_mythology,
    };
    let result = compose(record, &request)?;

    match format {
        Format::Json => {
            let json = render::composition_json(record, &request, &result);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Format::Markdown => print!("{}", render::composition_markdown(record, &result)),
    }
    Ok(())
}

fn cmd_search(
    catalog: &Catalog,
    query: Option<&str>,
    theme: Option<String>,
    shape: Option<String>,
    brightness: Option<String>,
    format: Format,
) -> Result<()> {
    let filters = SearchFilters {
        theme,
        shape_class: shape,
        brightness,
    };
    let hits = search(catalog, query, &filters)?;

    match format {
        Format::Json => {
            let json = render::search_results_json(&hits);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Format::Markdown => {
            if hits.is_empty() {
                println!("(no matches)");
            } else {
                print!("{}", render::search_results_markdown(&hits));
            }
        }
    }
    Ok(())
}

fn cmd_list(catalog: &Catalog, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let json = render::listing_json(catalog);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Format::Markdown => print!("{}", render::listing_markdown(catalog)),
    }
    Ok(())
}
