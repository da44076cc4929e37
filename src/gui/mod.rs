//! Scrolling viewer: every panel pulls one row per step from its own engine
//! and shows the most recent rows, newest at the bottom.

mod app;
mod config;
mod draw;
mod history;
mod palette;
mod panel;
mod step_timer;

pub use app::App;
pub use config::{Config, GridShape, InitialState, Settings};
pub use history::HistoryBuffer;
pub use palette::Palette;
pub use panel::Panel;
pub use step_timer::StepTimer;

use crate::{Error, Result};
use eframe::egui::{vec2, ViewportBuilder};

/// Open the viewer window and block until it is closed.
///
/// Engines are built before the window opens, so bad settings never reach the UI.
pub fn run(settings: Settings) -> Result<()> {
    let panels = settings.build_panels()?;
    log::info!(
        "viewer: rule {}, {} panel(s) of {}x{}, delay {:?}",
        settings.rule.number(),
        panels.len(),
        settings.width,
        settings.height,
        settings.delay
    );

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(Config::WINDOW_SIZE[0], Config::WINDOW_SIZE[1]))
            .with_min_inner_size(vec2(Config::MIN_WINDOW_SIZE[0], Config::MIN_WINDOW_SIZE[1])),
        ..Default::default()
    };
    let title = format!("Elementary cellular automaton: rule {}", settings.rule.number());
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(settings, panels)))),
    )
    .map_err(|e| Error::Viewer(e.to_string()))
}
