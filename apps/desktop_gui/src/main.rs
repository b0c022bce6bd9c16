mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::DEFAULT_SERVER_URL;
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::GridGameApp;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, env = "GAME_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(args.server_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Grid Game")
            .with_inner_size([360.0, 480.0])
            .with_min_inner_size([320.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Grid Game",
        options,
        Box::new(|_cc| Ok(Box::new(GridGameApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("failed to run desktop window: {err}"))
}
