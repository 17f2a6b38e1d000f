use std::path::Path;
use std::time::Duration;

use lens_analytics::TextAnalyticsClient;
use lens_config::LensConfig;
use lens_core::{FeedbackAnalyzer, FeedbackSource, SampleFeedback};

mod failure;
mod pipeline;
mod report;

use failure::RunError;
use report::{ConsoleReporter, REPORT_PATH};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = init_tracing() {
        eprintln!("{error:#}");
    }

    if let Err(error) = run().await {
        tracing::debug!(?error, "run failed");
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}

async fn run() -> Result<(), RunError> {
    let (analyzer, config) = prepare()?;
    let feedback = SampleFeedback.load().map_err(anyhow::Error::from)?;

    let mut reporter = ConsoleReporter::stdout();
    pipeline::run_batch(
        &analyzer,
        &feedback,
        &config.language,
        &mut reporter,
        Path::new(REPORT_PATH),
    )
    .await?;
    Ok(())
}

/// Load and check configuration, then build the client. No request is made.
fn prepare() -> Result<(FeedbackAnalyzer<TextAnalyticsClient>, LensConfig), RunError> {
    let config = LensConfig::load_with_dotenv()?.validate()?;
    let client = TextAnalyticsClient::new(
        &config.endpoint,
        &config.key,
        &config.api_version,
        Duration::from_secs(config.timeout_secs),
    )
    .map_err(RunError::Setup)?;
    Ok((FeedbackAnalyzer::new(client), config))
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("FEEDBACK_LENS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
