use super::HistoryBuffer;
use crate::AutomatonEngine;
use eframe::egui::TextureHandle;

/// One automaton on screen: its engine, the rows it has produced, and the
/// texture they are drawn into.
pub struct Panel {
    engine: AutomatonEngine,
    history: HistoryBuffer,
    pub(super) texture: Option<TextureHandle>,
}

impl Panel {
    /// The engine's starting row becomes the first line of `history`.
    pub fn new(engine: AutomatonEngine, mut history: HistoryBuffer) -> Self {
        history.push(engine.current_row());
        Self {
            engine,
            history,
            texture: None,
        }
    }

    pub fn engine(&self) -> &AutomatonEngine {
        &self.engine
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn tick(&mut self) {
        let row = self.engine.step();
        self.history.push(&row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Row, RuleTable, SeedPolicy};

    #[test]
    fn test_tick_appends_rows() {
        let engine = AutomatonEngine::new(RuleTable::from(90), 5, SeedPolicy::SingleCenter).unwrap();
        let mut panel = Panel::new(engine, HistoryBuffer::new(5, 2).unwrap());
        assert_eq!(panel.history().len(), 1);

        panel.tick();
        panel.tick();

        assert_eq!(panel.engine().generation(), 2);
        assert_eq!(panel.history().line(0), Row::from_bits(&[0, 1, 0, 1, 0]).cells());
        assert_eq!(panel.history().line(1), Row::from_bits(&[1, 0, 0, 0, 1]).cells());
    }
}
