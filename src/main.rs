//! CLI entry point for dateline

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dateline::content::DateOrdering;
use dateline::content::parse_date_string;

#[derive(Parser)]
#[command(name = "dateline")]
#[command(version)]
#[command(about = "Date-ordered posts, slugs and feeds for a static blog", long_about = None)]
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
    /// Write the feed and the search index
    #[command(alias = "g")]
    Build,

    /// Write the RSS feed only
    Feed,

    /// Write the search index only
    Search,

    /// List posts
    List {
        /// Date ordering (asc, desc)
        #[arg(short, long, default_value = "asc")]
        order: DateOrdering,
    },

    /// List tags with post counts
    Tags,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Slug text (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,

        /// Publication date (defaults to now)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete the public folder
    Clean,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "dateline=debug,info"
    } else {
        "dateline=info"
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
    let site = dateline::Site::new(&base_dir)?;

    match cli.command {
        Commands::Build => {
            tracing::info!("Generating outputs...");
            site.build().await?;
            println!("Generated successfully!");
        }

        Commands::Feed => {
            dateline::commands::generate::feed(&site).await?;
        }

        Commands::Search => {
            dateline::commands::generate::search(&site).await?;
        }

        Commands::List { order } => {
            dateline::commands::list::posts(&site, order).await?;
        }

        Commands::Tags => {
            dateline::commands::list::tags(&site).await?;
        }

        Commands::New { title, slug, date } => {
            let date = match date {
                Some(raw) => parse_date_string(&raw)
                    .ok_or_else(|| anyhow::anyhow!("unrecognised date: {}", raw))?,
                None => chrono::Local::now().fixed_offset(),
            };
            let path =
                dateline::commands::new::create_post(&site, &title, date, slug.as_deref())?;
            println!("Created {}", path.display());
        }

        Commands::Clean => {
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
