use super::HistoryBuffer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Live cells black on white.
    Greys,
    /// Live cells white on black.
    Inverted,
}

impl Palette {
    pub fn shade(&self, alive: bool) -> u8 {
        match (self, alive) {
            (Self::Greys, true) | (Self::Inverted, false) => 0,
            (Self::Greys, false) | (Self::Inverted, true) => u8::MAX,
        }
    }

    /// Transforms the history into single-channel image data.
    pub fn transform(&self, history: &HistoryBuffer) -> Vec<u8> {
        history.cells().iter().map(|&c| self.shade(c)).collect()
    }
}
