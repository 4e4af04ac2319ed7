mod config;

use anyhow::Result;
use config::DaemonConfig;
use tokio::signal;
use tokio::time::{interval, Duration};
use tracing_subscriber::EnvFilter;
use vigil_check::VerificationEngine;
use vigil_notify::{ConsoleReporter, EmailReporter, Reporter};
use vigil_probe::{HttpSearchClient, ShellProber};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vigil=info".parse()?))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/vigil.toml".to_string());
    let config = DaemonConfig::load(&config_path)?;

    let reporter: Box<dyn Reporter> = match &config.smtp {
        Some(smtp) => Box::new(EmailReporter::new(
            &smtp.host,
            smtp.port,
            smtp.username.as_deref(),
            smtp.password.as_deref(),
            &smtp.from,
            &smtp.to,
        )?),
        None => Box::new(ConsoleReporter::new()),
    };

    let engine = VerificationEngine::new(config.checks);
    let probes = ShellProber::new();
    let search = HttpSearchClient::new();

    tracing::info!(
        reporter = reporter.channel_name(),
        log_searches = engine.config().log_search.len(),
        "vigil starting"
    );

    match config.check_interval_secs {
        Some(secs) => {
            let mut tick = interval(Duration::from_secs(secs));
            tracing::info!(interval_secs = secs, "Starting verification loop");

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        run_once(&engine, &probes, &search, reporter.as_ref()).await;
                    }
                    _ = signal::ctrl_c() => {
                        tracing::info!("Shutting down gracefully");
                        break;
                    }
                }
            }
        }
        None => run_once(&engine, &probes, &search, reporter.as_ref()).await,
    }

    Ok(())
}

async fn run_once(
    engine: &VerificationEngine,
    probes: &ShellProber,
    search: &HttpSearchClient,
    reporter: &dyn Reporter,
) {
    let findings = engine.run(probes, search).await;
    if findings.is_empty() {
        tracing::debug!("All checks passed");
        return;
    }

    tracing::warn!(count = findings.len(), "Verification produced findings");
    if let Err(e) = reporter.report(&findings).await {
        tracing::error!(error = %e, "Failed to report findings");
    }
}
