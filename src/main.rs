use cart_allocator::config::{load_config, AppConfig};
use cart_allocator::model::AppError;
use cart_allocator::run;
use cart_allocator::writer::write_output;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());

    match process(&config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn process(config_path: &str) -> Result<(), AppError> {
    let config: AppConfig = load_config(config_path)?;
    let output = run(&config).await?;

    for group in &output.report.groups {
        info!(
            "{}: {}/{} units from {} offers, {:.2}",
            group.name, group.allocated, group.wanted, group.offers_used, group.cost
        );
    }
    info!("Total cost: {:.2}", output.report.total_cost);

    if !output.report.is_fully_covered() {
        warn!(
            "⚠️ {} units could not be covered by this store",
            output.report.total_shortfall()
        );
    }

    write_output(&output, config.output_path.as_deref().map(Path::new))?;
    Ok(())
}
