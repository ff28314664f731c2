mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::CompanyAdminApp;

const WINDOW_TITLE: &str = "Company Management";

#[derive(Parser, Debug)]
struct Args {
    /// Backend base URL; overrides company_admin.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = load_settings()
        .with_api_base_url(args.api_url)
        .validated()?;
    info!(api_base_url = %settings.api_base_url, "starting company admin");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    let api_base_url = settings.api_base_url.clone();
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(CompanyAdminApp::new(cmd_tx, ui_rx, api_base_url)))),
    )
    .map_err(|err| anyhow!("desktop window exited with error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn api_url_flag_is_optional() {
        let args = Args::try_parse_from(["desktop_gui"]).expect("parse");
        assert!(args.api_url.is_none());

        let args = Args::try_parse_from(["desktop_gui", "--api-url", "http://10.0.0.5:8000"])
            .expect("parse");
        assert_eq!(args.api_url.as_deref(), Some("http://10.0.0.5:8000"));
    }
}
