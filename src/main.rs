mod artifact;
mod parser;
mod record;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use parser::profile::Category;

#[derive(Parser)]
#[command(name = "dst_scraper", about = "Don't Starve wiki food-table converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a saved wiki table page into the intermediate CSV
    Csv {
        /// Table category the page holds
        #[arg(value_enum)]
        category: Category,
        /// Saved HTML page
        input: PathBuf,
        /// CSV destination
        output: PathBuf,
    },
    /// Normalize an intermediate CSV into the final JSON
    Json {
        /// Table category the CSV holds
        #[arg(value_enum)]
        category: Category,
        /// Intermediate CSV
        input: PathBuf,
        /// JSON destination
        output: PathBuf,
    },
    /// Both stages: HTML -> CSV -> JSON
    Run {
        /// Table category the page holds
        #[arg(value_enum)]
        category: Category,
        /// Saved HTML page
        input: PathBuf,
        /// Intermediate CSV destination
        csv: PathBuf,
        /// JSON destination
        json: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Csv { category, input, output } => {
            let rows = parser::html_to_csv(category.profile(), &input, &output)?;
            println!("Wrote {} rows to {}", rows, output.display());
        }
        Commands::Json { category, input, output } => {
            let records = parser::csv_to_json(category.profile(), &input, &output)?;
            println!("Wrote {} records to {}", records, output.display());
        }
        Commands::Run { category, input, csv, json } => {
            let profile = category.profile();
            let rows = parser::html_to_csv(profile, &input, &csv)?;
            println!("Extracted {} rows -> {}", rows, csv.display());
            let records = parser::csv_to_json(profile, &csv, &json)?;
            println!("Normalized {} records -> {}", records, json.display());
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}
