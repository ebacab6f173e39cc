mod analysis;
mod app;
mod color;
mod config;
mod context;
mod data;
mod fonts;
mod state;
mod ui;
mod wordcloud;

use anyhow::{anyhow, Context as _};
use app::{DashboardApp, TITLE};
use config::DashboardConfig;
use context::DashboardContext;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let config = DashboardConfig::rooted_at(&cwd);
    let context = DashboardContext::load(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0])
            .with_title(TITLE),
        ..Default::default()
    };

    let font_path = config.font_path.clone();
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| {
            let font = fonts::register(&cc.egui_ctx, &font_path);
            Ok(Box::new(DashboardApp::new(context.with_font(font))))
        }),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}
