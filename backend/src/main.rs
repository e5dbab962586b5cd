//! Housing Road CLI - serve and inspect the district analysis dataset
//!
//! ```bash
//! housing-road serve                          # Start HTTP server (port 3000)
//! housing-road serve --data-file other.csv    # Serve a different dataset
//! housing-road parse data.csv                 # Print typed records as JSON
//! housing-road summary data.csv               # Print { data, summary }
//! housing-road summary data.csv --summary-only
//! ```

use clap::{Parser, Subcommand};
use housing_road::{load_analysis, AppConfig};
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "housing-road")]
#[command(about = "Housing density and road infrastructure analysis API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = housing_road::config::DEFAULT_PORT)]
        port: u16,

        /// Address to bind
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        /// CSV file served by the analysis endpoint
        #[arg(short, long, env = "HOUSING_DATA_FILE", default_value = housing_road::config::DEFAULT_DATA_FILE)]
        data_file: PathBuf,
    },

    /// Parse a CSV file and output the typed records
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Output records and summary statistics for a CSV file
    Summary {
        /// Input CSV file
        input: PathBuf,

        /// Only output the summary
        #[arg(long)]
        summary_only: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            host,
            data_file,
        } => cmd_serve(AppConfig::new(data_file).with_host(host).with_port(port)).await,

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()).await,

        Commands::Summary {
            input,
            summary_only,
            output,
        } => cmd_summary(&input, summary_only, output.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    housing_road::server::start_server(config).await?;
    Ok(())
}

async fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let payload = load_analysis(input).await?;

    if let Some(first) = payload.data.first() {
        eprintln!("   Columns: {}", first.columns().collect::<Vec<_>>().join(", "));
    }
    eprintln!("Parsed {} records", payload.data.len());

    let json = serde_json::to_string_pretty(&payload.data)?;
    write_output(&json, output)
}

async fn cmd_summary(
    input: &Path,
    summary_only: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = load_analysis(input).await?;

    let json = if summary_only {
        serde_json::to_string_pretty(&payload.summary)?
    } else {
        serde_json::to_string_pretty(&payload)?
    };
    write_output(&json, output)
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
