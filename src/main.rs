use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triage_api::{fetch_all_records, ApiClient, ApiConfig};
use triage_core::{classify, validate, CohortReport, RiskEvaluator, RiskThresholds, ValidationOutcome};

/// Batch triage run: fetch patient vitals, score risk, classify cohorts,
/// submit the cohort report.
#[derive(Parser)]
#[command(name = "triage-run")]
struct Args {
    /// Base URL of the patient-vitals API
    #[arg(long, default_value = "https://assessment.ksensetech.com/api")]
    base_url: String,
    /// Page size for paginated fetches
    #[arg(long, default_value_t = 20)]
    page_size: u32,
    /// Classify and print only; skip submitting the cohort report
    #[arg(long)]
    no_submit: bool,
}

/// Main entry point for the triage batch run.
///
/// Runs the whole pipeline as one uninterrupted sequence: fetch every page
/// of records, validate each against the required-field contract, score and
/// classify, print the run summary, then submit the cohort report
/// fire-and-forget.
///
/// # Environment Variables
/// - `API_KEY`: credential attached to every request (required)
/// - `RUST_LOG`: tracing filter, on top of the `info` default for this crate
///
/// Note that a permanently broken remote source makes the fetch retry
/// forever; wrap the process in an external timeout if a hard bound is
/// needed.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triage_run=info".parse()?)
                .add_directive("triage_core=info".parse()?)
                .add_directive("triage_api=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let api_key = std::env::var("API_KEY").context("API_KEY not set in environment")?;
    let config = ApiConfig::new(args.base_url, api_key)?.with_page_size(args.page_size);
    let client = ApiClient::new(config);

    info!("fetching patient records");
    let records = fetch_all_records(&client).await;
    info!(total = records.len(), "fetch complete");

    let outcomes: Vec<ValidationOutcome> = records.into_iter().map(validate).collect();
    let evaluator = RiskEvaluator::new(RiskThresholds::default());
    let report = classify(&evaluator, &outcomes);

    print_summary(&outcomes, &report);

    if args.no_submit {
        info!("submission skipped (--no-submit)");
    } else {
        client.submit_cohorts(&report).await;
    }

    Ok(())
}

fn print_summary(outcomes: &[ValidationOutcome], report: &CohortReport) {
    let identified = outcomes
        .iter()
        .filter(|outcome| outcome.record.id().is_some())
        .count();

    println!("Patients fetched: {identified}");
    print_cohort("High risk", &report.high_risk_patients);
    print_cohort("Fever", &report.fever_patients);
    print_cohort("Data quality issues", &report.data_quality_issues);
}

fn print_cohort(label: &str, ids: &[String]) {
    if ids.is_empty() {
        println!("{label}: none");
    } else {
        println!("{label} ({}): {}", ids.len(), ids.join(", "));
    }
}
