use std::process::ExitCode;

use geometa::server::{
    config::Config,
    error::Error,
    model::{form::FormData, report::SubmissionReport},
    service::submission::SubmissionService,
    startup,
};
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    startup::init_logging(&config);

    match run(&config).await {
        Ok(report) if report.is_complete() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "Submission failed");
            ExitCode::FAILURE
        }
    }
}

/// Reads one submission document, saves it and prints the report
async fn run(config: &Config) -> Result<SubmissionReport, Error> {
    let db = startup::connect_to_database(config).await?;

    let document = match std::env::args().nth(1) {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut document = String::new();
            tokio::io::stdin().read_to_string(&mut document).await?;
            document
        }
    };
    let form = FormData::from_json(serde_json::from_str(&document)?)?;

    let report = SubmissionService::new(&db, config.submission_atomic)
        .save(&form)
        .await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(report)
}
