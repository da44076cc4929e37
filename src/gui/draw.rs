use super::{App, Config, Palette};
use eframe::egui::{
    load::SizedTexture, Button, ColorImage, DragValue, Image, RichText, Stroke, TextureOptions,
    Ui, Vec2,
};
use std::time::Duration;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_run_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        if ui.add(Self::new_button("Next step")).clicked() {
            self.is_paused = true;
            self.do_one_step = true;
        }

        if ui.add(Self::new_button("Restart")).clicked() {
            self.restart_or_log();
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Delay, ms: "));
            let mut delay_ms = self.step_timer.delay().as_millis() as u64;
            if ui
                .add(DragValue::new(&mut delay_ms).range(0..=2000))
                .changed()
            {
                self.step_timer.set_delay(Duration::from_millis(delay_ms));
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Palette: "));
            ui.radio_value(&mut self.palette, Palette::Greys, Self::new_text("Greys"));
            ui.radio_value(
                &mut self.palette,
                Palette::Inverted,
                Self::new_text("Inverted"),
            );
        });
    }

    fn draw_stats(&self, ui: &mut Ui) {
        let rule = self.settings.rule;
        ui.label(Self::new_text(&format!("Rule {}", rule.number())));
        ui.label(Self::new_text(&rule.to_string().replace(' ', "\n")));

        ui.label(Self::new_text(&format!(
            "\nGeneration: {}",
            self.generation
        )));
        if let Some(left) = self.steps_left {
            ui.label(Self::new_text(&format!("Steps left: {}", left)));
        }
        ui.label(Self::new_text(&format!(
            "Steps/s: {:.0}",
            self.step_timer.steps_per_second()
        )));
        ui.label(Self::new_text(&format!(
            "Last update: {:.3} ms",
            self.last_update_duration * 1e3
        )));

        for (k, panel) in self.panels.iter().enumerate() {
            let engine = panel.engine();
            let mut line = format!(
                "#{} density {:.3}",
                k,
                engine.current_row().density()
            );
            if let Some(p) = engine.bias() {
                line += &format!(", p {:.3}", p);
            }
            ui.label(Self::new_text(&line));
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_run_controls(ui);

                    ui.add_space(Config::GAP_ABOVE_STATS);

                    self.draw_stats(ui);
                });
            });
        });
    }

    /// Size in points of one panel so that the whole grid fits into `area`
    /// and cells stay square.
    fn panel_size(&self, area: Vec2) -> Vec2 {
        let grid = self.settings.grid;
        let gaps = Vec2::new(
            Config::PANEL_GAP * (grid.cols - 1) as f32,
            Config::PANEL_GAP * (grid.rows - 1) as f32,
        );
        let avail = (area - gaps).max(Vec2::ZERO);
        let (w, h) = (self.settings.width as f32, self.settings.height as f32);
        let scale = (avail.x / (w * grid.cols as f32)).min(avail.y / (h * grid.rows as f32));
        Vec2::new(w, h) * scale
    }

    fn draw_fields(&mut self, ui: &mut Ui) {
        let size = self.panel_size(ui.available_size());
        let cols = self.settings.grid.cols;
        let palette = self.palette;

        ui.spacing_mut().item_spacing = Vec2::splat(Config::PANEL_GAP);
        ui.vertical(|ui| {
            for grid_row in self.panels.chunks_mut(cols) {
                ui.horizontal(|ui| {
                    for panel in grid_row {
                        let history = panel.history();
                        let gray = palette.transform(history);
                        let image = ColorImage::from_gray([history.width(), history.height()], &gray);
                        let texture = panel.texture.get_or_insert_with(|| {
                            ui.ctx().load_texture(
                                "automaton",
                                ColorImage::default(),
                                TextureOptions::NEAREST,
                            )
                        });
                        texture.set(image, TextureOptions::NEAREST);
                        let source = SizedTexture::new(texture.id(), size);
                        ui.add(Image::from_texture(source));
                    }
                });
            }
        });
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.draw_controls(ui);
            self.draw_fields(ui);
        });
    }
}
