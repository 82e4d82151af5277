//! Resigner - command-line entry point
//!
//! `resigner [--list] [TEMPLATE_ID]` loads the templates, selects the given
//! template (or the first one) and exports it as a PDF into the configured
//! output directory.

use anyhow::Context;
use resigner::{commands, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Settings and file-backed templates live here, under the working directory
const APP_DATA_DIR: &str = ".resigner";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Resigner");

    let mut list_only = false;
    let mut template_id = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--list" => list_only = true,
            _ => template_id = Some(arg),
        }
    }

    let app_data_dir = std::env::current_dir()?.join(APP_DATA_DIR);
    tracing::info!("App data directory: {:?}", app_data_dir);
    let state = Arc::new(AppState::from_app_data_dir(app_data_dir)?);

    // The template list loads as a deferred task, like the gallery does on startup.
    let runtime = tokio::runtime::Runtime::new()?;
    let load = runtime.spawn(commands::load_templates(Arc::clone(&state)));
    let loaded = runtime.block_on(load)?.map_err(anyhow::Error::msg)?;
    tracing::info!("Loaded {} templates", loaded);

    let templates = commands::list_templates(&state).map_err(anyhow::Error::msg)?;
    if list_only {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    let template_id = match template_id {
        Some(id) => id,
        None => templates
            .first()
            .map(|t| t.id.clone())
            .context("no templates available")?,
    };
    let selected = commands::select_template(&template_id, &state).map_err(anyhow::Error::msg)?;
    tracing::info!("Selected template: {}", selected.title);

    match commands::export_pdf(&state).map_err(anyhow::Error::msg)? {
        Some(path) => println!("{}", path.display()),
        None => tracing::warn!("Nothing was exported"),
    }
    Ok(())
}
