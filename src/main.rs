//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::commands::list::ListOptions;
use folio_rs::projects::ProjectRange;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Portfolio content tool: order, filter and export projects", long_about = None)]
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
    /// Initialize a new portfolio site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new project
    New {
        /// Title of the new project
        title: String,

        /// Slug (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List projects in display order
    #[command(alias = "ls")]
    List {
        /// Slugs to leave out, comma separated
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// 1-based window: N, N.. or N..M
        #[arg(short, long)]
        range: Option<ProjectRange>,

        /// Show only the configured featured range
        #[arg(short, long)]
        featured: bool,
    },

    /// Generate project data files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
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
            tracing::info!("Initializing portfolio site in {:?}", target_dir);
            folio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized portfolio site in {:?}", target_dir);
        }

        Commands::New { title, slug } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Creating new project: {}", title);
            let path = folio_rs::commands::new::create_project(&folio, &title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::List {
            exclude,
            range,
            featured,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let options = ListOptions {
                exclude,
                range,
                featured,
            };
            folio_rs::commands::list::run(&folio, &options)?;
        }

        Commands::Generate { watch } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Generating project data...");

            folio_rs::commands::generate::run(&folio)?;
            println!("Generated successfully!");

            if watch {
                tokio::task::spawn_blocking(move || folio_rs::commands::generate::watch(&folio))
                    .await??;
            }
        }

        Commands::Server { port, ip } => {
            let folio = folio_rs::Folio::new(&base_dir)?;

            tracing::info!("Generating project data...");
            folio.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio_rs::server::start(&folio, &ip, port).await?;
        }

        Commands::Clean => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
