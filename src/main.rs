mod app;
mod cli;
mod color;
mod data;
mod state;
mod ui;
mod view;

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use app::TownProfileApp;
use clap::Parser;
use cli::Args;
use eframe::egui;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let sources = args.data_sources();
    let dataset = data::loader::load(&sources).with_context(|| {
        format!(
            "loading town data from {} and {}",
            sources.demographics.display(),
            sources.education.display()
        )
    })?;
    if dataset.is_empty() {
        log::warn!("No town appears in both sources");
    } else {
        log::info!("Loaded {} towns", dataset.len());
    }

    let threshold = args.threshold();

    if args.headless {
        let view = view::compute_view(&dataset, threshold);
        let json = serde_json::to_string_pretty(&view).context("serializing view")?;
        println!("{json}");
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        view::text::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(TownProfileApp::new(dataset, threshold)))),
    )
    .map_err(|e| anyhow!("running dashboard window: {e}"))
}
