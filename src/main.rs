use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use yapidenetim_smoke::{report, runner, SuiteConfig};

#[derive(Parser)]
#[command(name = "yapidenetim-smoke")]
#[command(version = "0.1.0")]
#[command(about = "End-to-end smoke tests for the yapidenetim platform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the smoke-test suite against a live deployment
    Run {
        /// Base URL of the backend API
        #[arg(long, default_value = "http://localhost:8001/api")]
        base_url: String,

        /// MongoDB connection string for the seed-record lookup
        #[arg(long, default_value = "mongodb://localhost:27017")]
        mongo_uri: String,

        /// Root of the deployed application tree
        #[arg(long, default_value = "/app")]
        app_root: PathBuf,

        /// Where to write the JSON summary report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a previously saved summary report
    Report {
        /// Path to a summary JSON produced by `run`
        results: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            base_url,
            mongo_uri,
            app_root,
            output,
        } => {
            let config = SuiteConfig::with_overrides(
                Some(base_url),
                Some(mongo_uri),
                Some(app_root),
                output,
            );

            println!("🚀 {}", "COMPREHENSIVE SMOKE TEST".bold());
            println!("{}", "=".repeat(60));
            println!("  API: {}", config.base_url.cyan());
            println!("  Store: {}", config.mongo_uri.cyan());
            println!("  App root: {}", config.app_root.display().to_string().cyan());

            let all_passed = runner::run_suite(&config).await?;
            if !all_passed {
                std::process::exit(1);
            }
        }

        Commands::Report { results } => {
            report::render_report_file(&results)?;
        }
    }

    Ok(())
}
