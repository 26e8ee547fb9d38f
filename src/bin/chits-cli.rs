use clap::{Parser, Subcommand};
use serde::Serialize;

use chits_client::services::{AnalyticsService, ChitService, UserService};
use chits_client::{ApiClient, ApiResponse, ClientConfig};

#[derive(Parser)]
#[command(name = "chits-cli")]
#[command(about = "Diagnostic CLI for the chits backend", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "https://chits-backend.vercel.app")]
    base_url: String,

    /// Per-attempt timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    timeout_ms: u64,

    /// Total attempts per request.
    #[arg(long, default_value_t = 3)]
    retries: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check backend liveness and version
    Health,
    /// Fetch system-wide chit and loan aggregates
    Analytics,
    /// List all registered users
    Users,
    /// Fetch one user with full chit and loan history
    User { user_id: String },
    /// Advance the weekly chit billing cycle
    WeeklyUpdate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chits_client=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ClientConfig {
        base_url: cli.base_url,
        timeout_ms: cli.timeout_ms,
        retry_attempts: cli.retries,
    };
    let api = ApiClient::new(&config)?;

    let ok = match cli.command {
        Commands::Health => {
            print_response(&AnalyticsService::new(api).get_health_status().await)?
        }
        Commands::Analytics => print_response(&AnalyticsService::new(api).get_analytics().await)?,
        Commands::Users => print_response(&UserService::new(api).get_all_users().await)?,
        Commands::User { user_id } => {
            print_response(&UserService::new(api).get_user_details(&user_id).await)?
        }
        Commands::WeeklyUpdate => {
            print_response(&ChitService::new(api).update_weekly_chits().await)?
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn print_response<T: Serialize>(
    response: &ApiResponse<T>,
) -> Result<bool, Box<dyn std::error::Error>> {
    match response {
        ApiResponse::Success { data, message } => {
            println!("{}", serde_json::to_string_pretty(data)?);
            if !message.is_empty() {
                eprintln!("{message}");
            }
            Ok(true)
        }
        ApiResponse::Failure { error, message } => {
            eprintln!("Error: {error}");
            eprintln!("{message}");
            Ok(false)
        }
    }
}
