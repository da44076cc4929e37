use super::{Config, Palette, Panel, Settings, StepTimer};
use crate::Result;
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin};
use std::time::Instant;

pub struct App {
    pub(super) settings: Settings,
    pub(super) panels: Vec<Panel>,   // One independent automaton per grid cell.
    pub(super) is_paused: bool,      // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,    // Do one step and pause.
    pub(super) steps_left: Option<u64>, // Steps left before pausing, if limited.
    pub(super) generation: u64,      // Steps done since the last restart.
    pub(super) last_update_duration: f64, // Duration of the last tick of all panels in seconds.
    pub(super) step_timer: StepTimer, // Paces steps to the configured delay.
    pub(super) palette: Palette,
}

impl App {
    pub fn new(settings: Settings, panels: Vec<Panel>) -> Self {
        Self {
            step_timer: StepTimer::new(settings.delay),
            steps_left: settings.frames,
            settings,
            panels,
            is_paused: false,
            do_one_step: false,
            generation: 0,
            last_update_duration: 0.,
            palette: Palette::Greys,
        }
    }

    /// Rebuild every panel from the settings; unseeded runs get fresh random rows.
    pub fn restart(&mut self) -> Result<()> {
        self.panels = self.settings.build_panels()?;
        self.steps_left = self.settings.frames;
        self.generation = 0;
        log::debug!("restarted {} panel(s)", self.panels.len());
        Ok(())
    }

    fn update_engines(&mut self) {
        if self.steps_left == Some(0) {
            self.is_paused = true;
            self.do_one_step = false;
        }
        if self.is_paused && !self.do_one_step {
            return;
        }
        if !self.do_one_step && !self.step_timer.is_due() {
            return;
        }

        let timer = Instant::now();
        for panel in self.panels.iter_mut() {
            panel.tick();
        }
        self.last_update_duration = timer.elapsed().as_secs_f64();
        self.step_timer.mark();

        self.generation += 1;
        if let Some(left) = self.steps_left.as_mut() {
            *left = left.saturating_sub(1);
        }
        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (step, toggle, restart) = ctx.input(|input| {
            (
                input.key_pressed(Key::Space),
                input.key_pressed(Key::E),
                input.key_pressed(Key::R),
            )
        });
        if step {
            self.is_paused = true;
            self.do_one_step = true;
        }
        if toggle {
            self.is_paused = !self.is_paused;
        }
        if restart {
            self.restart_or_log();
        }
    }

    pub(super) fn restart_or_log(&mut self) {
        if let Err(e) = self.restart() {
            log::error!("restart failed: {}", e);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.update_engines();

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                self.draw(ui);
            });

        if !self.is_paused {
            ctx.request_repaint_after(self.step_timer.remaining());
        }
    }
}
