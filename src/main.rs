//! CLI entry point for finsite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finsite::commands::new::DocumentKind;
use finsite::content::ContentFormat;

#[derive(Parser)]
#[command(name = "finsite")]
#[command(author = "Top Finanzas")]
#[command(version)]
#[command(about = "Static site generator for a content-driven financial site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site with sample content
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new blog post or credit-card page document
    New {
        /// Title of the new document; its slug names the file
        title: String,

        /// Kind of document
        #[arg(short, long, value_enum, default_value = "blog")]
        kind: DocumentKind,

        /// Data format to write (json, yaml, toml)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,

        /// Viewport width to render for (defaults to the configured width)
        #[arg(long)]
        viewport: Option<u32>,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Remove the public folder
    Clean,

    /// List site content
    List {
        /// Type of content to list (blog, cards, categories, documents)
        #[arg(default_value = "blog")]
        r#type: String,

        /// Only list identifiers matching this glob
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Load every document and render every page without writing
    Check,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "finsite=debug,info"
    } else {
        "finsite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            finsite::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New {
            title,
            kind,
            format,
        } => {
            let site = finsite::Site::new(&base_dir)?;
            let format = ContentFormat::from_extension(&format)
                .ok_or_else(|| anyhow::anyhow!("Unknown format: {}", format))?;
            tracing::info!("Creating new {:?} document: {}", kind, title);
            finsite::commands::new::create_document(&site, &title, kind, format)?;
        }

        Commands::Generate { watch, viewport } => {
            let site = finsite::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");

            finsite::commands::generate::run(&site, viewport)?;
            println!("Generated successfully!");

            if watch {
                finsite::commands::generate::watch(&site, viewport).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = finsite::Site::new(&base_dir)?;

            // A page that fails to render should not keep the server from starting
            tracing::info!("Generating static files...");
            if let Err(e) = site.generate() {
                tracing::error!("{:#}", e);
            }

            tracing::info!("Starting server at http://{}:{}", ip, port);
            finsite::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let site = finsite::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type, pattern } => {
            let site = finsite::Site::new(&base_dir)?;
            finsite::commands::list::run(&site, &r#type, pattern.as_deref())?;
        }

        Commands::Check => {
            let site = finsite::Site::new(&base_dir)?;
            finsite::commands::check::run(&site)?;
            println!("All documents and pages are valid.");
        }

        Commands::Version => {
            println!("finsite version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
