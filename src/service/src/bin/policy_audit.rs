//! Mealgate policy audit
//!
//! Prints the full decision matrix and listing filters as JSON on stdout.

use mealgate_service::{audit, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Mealgate policy audit v{}", mealgate_authz::VERSION);

    let config = ServiceConfig::from_env();
    tracing::info!(
        "Config: disclosure={}, enforce_status_transitions={}, max_order_items={}, max_item_quantity={}",
        config.disclosure,
        config.enforce_status_transitions,
        config.max_order_items,
        config.max_item_quantity
    );

    let matrix = audit::policy_matrix();
    tracing::info!(
        "Evaluated {} decisions and {} listing filters",
        matrix.decisions.len(),
        matrix.filters.len()
    );

    println!("{}", serde_json::to_string_pretty(&matrix)?);

    Ok(())
}
