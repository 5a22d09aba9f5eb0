use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use tradefee_core::{FeeLookupService, FinanceActService, TaxonomyService};
use tradefee_dataset::load_dataset;

use crate::config::{Config, LogFormat};

pub struct AppState {
    pub lookup: FeeLookupService,
}

/// Logs go to stderr so they never interleave with the rendered page on stdout.
pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let dataset = load_dataset(config.data_dir.as_deref()).context("Failed to load datasets")?;

    let taxonomy_service = Arc::new(TaxonomyService::new(dataset.taxonomy));
    let finance_act_service = Arc::new(FinanceActService::new(dataset.finance_act));
    let lookup = FeeLookupService::new(taxonomy_service, finance_act_service);

    // Flatten up front so the first keystroke does not pay for it.
    let activities = lookup.activities()?;
    tracing::info!("{} activities available for lookup", activities.len());

    Ok(AppState { lookup })
}
