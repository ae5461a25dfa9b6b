//! Solar Shell entry point
//!
//! Starts the shell against the host's color scheme and wall clock and
//! prints the current screen as JSON.

use std::sync::Arc;

use anyhow::Context;
use app_platform::{Appearance, SystemClock};
use solar_shell::{App, AppConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;
    let app = App::start(&config, Appearance::detect(), Arc::new(SystemClock))
        .context("starting shell")?;

    let theme = app.theme();
    tracing::info!(
        mode = %theme.mode(),
        rendered_dark = theme.is_rendered_dark(),
        sunlight_override = theme.is_sunlight_override_active(),
        logged_in = app.is_logged_in(),
        "shell ready"
    );

    println!("{}", serde_json::to_string_pretty(&app.view())?);
    Ok(())
}
