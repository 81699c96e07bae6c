//! CLI entry point for vomit-rs

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vomit_rs::commands::add::AddOptions;
use vomit_rs::BuildReport;

#[derive(Parser)]
#[command(name = "vomit-rs")]
#[command(version)]
#[command(about = "Turn a directory of dated Markdown posts into a static blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Without a subcommand the site is generated
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site (the default)
    #[command(alias = "g")]
    Generate {
        /// Exit with an error if any post or page failed
        #[arg(long)]
        strict: bool,
    },

    /// Create a new dated post from an existing file
    Add {
        /// File to copy into the posts directory
        source: PathBuf,

        /// Title for the new post (also used for its slug)
        #[arg(short, long)]
        title: Option<String>,

        /// Publication date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List posts, newest first
    List,

    /// Remove the site directory
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "vomit_rs=debug,info"
    } else {
        "vomit_rs=info"
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
    let vomit = vomit_rs::Vomit::new(&base_dir)?;

    match cli.command.unwrap_or(Commands::Generate { strict: false }) {
        Commands::Generate { strict } => {
            tracing::info!("Generating site in {:?}", vomit.site_dir);
            finish_generate(vomit.generate(), strict)?;
        }

        Commands::Add {
            source,
            title,
            date,
        } => {
            let created = vomit.add_post(&source, &AddOptions { title, date })?;
            println!("Created: {:?}", created);
        }

        Commands::List => {
            vomit_rs::commands::list::run(&vomit)?;
        }

        Commands::Clean => {
            vomit.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}

/// Report a build. Failures only change the exit status with `--strict`.
fn finish_generate(result: Result<BuildReport>, strict: bool) -> Result<()> {
    let report = match result {
        Ok(report) => report,
        Err(e) if strict => return Err(e),
        Err(e) => {
            tracing::error!("Build aborted: {:#}", e);
            return Ok(());
        }
    };

    if strict && report.diagnostics.has_failures() {
        anyhow::bail!("Build finished with errors: {}", report.diagnostics.summary());
    }
    println!("Generated {} posts", report.posts.len());
    Ok(())
}
