#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, anyhow};
use args::Args;
use clap::Parser;
use eframe::NativeOptions;
use link::WsLink;
use regview_app::App;

mod args;
mod link;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = args.into_config();
    let link = WsLink::connect(&config.url).context("Failed to start the device link")?;

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_title("Register Display"),
        ..Default::default()
    };

    eframe::run_native(
        "Register Display",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(link, config)))),
    )
    .map_err(|e| anyhow!("eframe exited with an error: {e}"))
}
