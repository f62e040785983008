use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use equifax_client::config::proc_loader::file_to_config;
use equifax_client::observability::metrics::render_metrics;
use equifax_client::utils::logging::{self, LogLevel};
use equifax_client::{CreditReport, Equifax, ReportOptions, ReportSubject};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "EQUIFAX_CONFIG", default_value = "equifax.yaml")]
    config: PathBuf,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// Print the prometheus metrics collected during the run
    #[arg(long)]
    metrics: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mint a token, confirm it is cached, then force a reset
    CheckAuth,
    /// Pull a Scores & Attributes report and summarize it
    Report(ReportArgs),
}

#[derive(clap::Args)]
struct ReportArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    middle_name: Option<String>,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    suffix: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    dob: Option<String>,
    #[arg(long)]
    ssn: Option<String>,
    #[arg(long)]
    house_number: Option<String>,
    #[arg(long)]
    street_name: Option<String>,
    #[arg(long)]
    street_type: Option<String>,
    #[arg(long)]
    apartment_number: Option<String>,
    #[arg(long)]
    city: String,
    #[arg(long)]
    state: String,
    #[arg(long)]
    zip: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    correlation_id: Option<String>,
    #[arg(long)]
    customer_reference: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config, start logging
    // -------------------------------

    let args = Args::parse();
    let config = file_to_config(&args.config)?;
    logging::run(config.logging.as_ref(), args.log_level);

    // -------------------------------
    // 2. Build the client
    // -------------------------------

    let client = Equifax::new(config)?;
    info!("client ready");

    // -------------------------------
    // 3. Run the command
    // -------------------------------

    let outcome = match args.command {
        Command::CheckAuth => check_auth(&client).await,
        Command::Report(report_args) => report(&client, report_args).await,
    };

    if args.metrics {
        println!("{}", render_metrics().await?);
    }
    outcome
}

async fn check_auth(client: &Equifax) -> Result<()> {
    let auth = client.authentication();

    println!("attempting to get an authentication token...");
    auth.check_token().await.map_err(|e| anyhow!("unable to get a valid auth token: {}", e))?;
    println!("Success!");

    println!("checking that the authentication token stuck...");
    auth.access_token().await.ok_or_else(|| anyhow!("unable to verify the new auth token"))?;
    println!("Success!");

    println!("attempting to reset for a new authentication token...");
    auth.reset_token().await.map_err(|e| anyhow!("unable to get a *new* valid auth token: {}", e))?;
    println!("Success!");
    Ok(())
}

async fn report(client: &Equifax, args: ReportArgs) -> Result<()> {
    let options = ReportOptions {
        customer_reference_identifier: args.customer_reference,
        correlation_id: args.correlation_id,
    };
    let subject = ReportSubject {
        first_name: args.first_name,
        middle_name: args.middle_name,
        last_name: args.last_name,
        suffix: args.suffix,
        dob: args.dob,
        ssn: args.ssn,
        house_number: args.house_number,
        street_name: args.street_name,
        street_type: args.street_type,
        apartment_number: args.apartment_number,
        city: args.city,
        state: args.state,
        zip: args.zip,
        phone: args.phone,
    };

    let report = client
        .scores_attributes()
        .report(&subject, &options)
        .await
        .map_err(|e| anyhow!("scores & attributes pull failed: {}", serde_json::to_string(&e).unwrap_or_else(|_| e.to_string())))?;
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &CreditReport) {
    let show = |v: Option<String>| v.unwrap_or_else(|| "none".to_owned());
    println!("Success! Pulled the report... FICO Score: {}", show(report.fico_score().map(|s| s.to_string())));
    println!("    ... Fraud indicator: {}", show(report.is_fraud().map(|f| f.join("; "))));
    println!("    ... Frozen: {}", report.is_frozen());
    println!("    ... Bankruptcies: {}", show(report.bankruptcies().map(|b| b.join("; "))));
}
