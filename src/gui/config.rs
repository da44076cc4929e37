use super::{HistoryBuffer, Panel};
use crate::{AutomatonEngine, Error, Result, Row, RuleTable, SeedPolicy};
use eframe::egui::Color32;
use std::{fmt, str::FromStr, time::Duration};

pub struct Config;

impl Config {
    pub const DEFAULT_RULE: u8 = crate::rule::RULE_110;
    pub const DEFAULT_WIDTH: usize = 512;
    pub const DEFAULT_HEIGHT: usize = 512;
    pub const DEFAULT_DELAY_MS: u64 = 1;

    pub const WINDOW_SIZE: [f32; 2] = [1280., 800.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [640., 360.];

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const PANEL_GAP: f32 = 8.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const GAP_ABOVE_STATS: f32 = 30.;
}

/// How every panel picks its first row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitialState {
    Random,
    Center,
    Biased,
    Explicit(Row),
}

impl InitialState {
    pub fn policy(&self) -> SeedPolicy {
        match self {
            Self::Random => SeedPolicy::UniformRandom,
            Self::Center => SeedPolicy::SingleCenter,
            Self::Biased => SeedPolicy::SelfBiasingRandom,
            Self::Explicit(row) => SeedPolicy::Explicit(row.clone()),
        }
    }
}

impl FromStr for InitialState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim() {
            "random" => Self::Random,
            "center" => Self::Center,
            "biased" => Self::Biased,
            bits => Self::Explicit(bits.parse()?),
        })
    }
}

/// Layout of independent automata drawn side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub const SINGLE: Self = Self { rows: 1, cols: 1 };

    pub fn count(&self) -> usize {
        self.rows * self.cols
    }
}

impl FromStr for GridShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::ParseGrid(s.to_string());
        let (rows, cols) = s.trim().split_once(['x', 'X']).ok_or_else(err)?;
        let rows = rows.parse::<usize>().map_err(|_| err())?;
        let cols = cols.parse::<usize>().map_err(|_| err())?;
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(err());
        }
        Ok(Self { rows, cols })
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Everything needed to start a run, collected from the command line.
#[derive(Clone, Debug)]
pub struct Settings {
    pub rule: RuleTable,
    /// Cells per row.
    pub width: usize,
    /// Rows kept on screen.
    pub height: usize,
    pub delay: Duration,
    pub grid: GridShape,
    pub init: InitialState,
    pub seed: Option<u64>,
    /// Pause after this many steps.
    pub frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rule: RuleTable::from(Config::DEFAULT_RULE),
            width: Config::DEFAULT_WIDTH,
            height: Config::DEFAULT_HEIGHT,
            delay: Duration::from_millis(Config::DEFAULT_DELAY_MS),
            grid: GridShape::SINGLE,
            init: InitialState::Random,
            seed: None,
            frames: None,
        }
    }
}

impl Settings {
    /// Seed of the `k`-th panel, so panels of a seeded run differ but stay reproducible.
    pub fn panel_seed(&self, k: usize) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(k as u64))
    }

    pub fn build_engine(&self, k: usize) -> Result<AutomatonEngine> {
        AutomatonEngine::with_seed(self.rule, self.width, self.init.policy(), self.panel_seed(k))
    }

    /// One engine per grid cell, each with its own history.
    pub fn build_panels(&self) -> Result<Vec<Panel>> {
        (0..self.grid.count())
            .map(|k| {
                let history = HistoryBuffer::new(self.width, self.height)?;
                Ok(Panel::new(self.build_engine(k)?, history))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid() {
        assert_eq!("2x3".parse::<GridShape>().unwrap(), GridShape { rows: 2, cols: 3 });
        assert_eq!("1X1".parse::<GridShape>().unwrap(), GridShape::SINGLE);
        for bad in ["", "2", "2x", "x3", "0x2", "2x0", "axb", "2x3x4"] {
            assert!(
                matches!(bad.parse::<GridShape>(), Err(Error::ParseGrid(_))),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_grid_too_many_panels() {
        let huge = format!("{}x2", usize::MAX);
        assert!(matches!(huge.parse::<GridShape>(), Err(Error::ParseGrid(_))));
        let side = 1usize << (usize::BITS / 2);
        let square = format!("{}x{}", side, side);
        assert!(matches!(square.parse::<GridShape>(), Err(Error::ParseGrid(_))));
    }

    #[test]
    fn test_parse_initial_state() {
        assert_eq!("center".parse::<InitialState>().unwrap(), InitialState::Center);
        assert_eq!("biased".parse::<InitialState>().unwrap(), InitialState::Biased);
        assert_eq!(
            "0110".parse::<InitialState>().unwrap(),
            InitialState::Explicit(Row::from_bits(&[0, 1, 1, 0]))
        );
        assert!(matches!(
            "sideways".parse::<InitialState>(),
            Err(Error::ParseRow('s'))
        ));
    }

    #[test]
    fn test_panel_seeds() {
        let settings = Settings {
            seed: Some(7),
            ..Settings::default()
        };
        assert_eq!(settings.panel_seed(0), Some(7));
        assert_eq!(settings.panel_seed(3), Some(10));
        assert_eq!(Settings::default().panel_seed(3), None);
    }

    #[test]
    fn test_build_panels() {
        let settings = Settings {
            width: 32,
            height: 16,
            grid: GridShape { rows: 2, cols: 2 },
            seed: Some(1),
            ..Settings::default()
        };
        let panels = settings.build_panels().unwrap();
        assert_eq!(panels.len(), 4);
        assert_ne!(
            panels[0].engine().current_row(),
            panels[1].engine().current_row()
        );
    }

    #[test]
    fn test_explicit_row_must_match_width() {
        let settings = Settings {
            width: 10,
            init: InitialState::Explicit(Row::dead(5)),
            ..Settings::default()
        };
        assert!(matches!(
            settings.build_panels(),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_height() {
        let settings = Settings {
            height: 0,
            ..Settings::default()
        };
        assert!(matches!(settings.build_panels(), Err(Error::InvalidSize)));
    }
}
