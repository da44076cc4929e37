mod random;


pub use random::BIAS_STEP;

use crate::{Error, Result, Row, RuleTable};
use random::{bernoulli_row, new_rng, BiasedSampler};

/// How the first row of an engine is obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Start from the given row; its length must match the engine size.
    Explicit(Row),
    /// A single live cell in the middle.
    SingleCenter,
    /// Every cell is alive with probability 0.5, then the rule takes over.
    UniformRandom,
    /// Ignore the rule and keep redrawing random rows whose density is
    /// pulled back toward 0.5 (see [`BIAS_STEP`]).
    SelfBiasingRandom,
}

/// Whether the engine has been advanced yet. Both phases accept further steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Stepped,
}

enum Mode {
    RuleDriven,
    SelfBiasing(BiasedSampler),
}

/// Owns the current row of a 1D automaton and advances it one generation at a time.
///
/// Cells outside `0..size` are treated as permanently dead.
pub struct AutomatonEngine {
    rule: RuleTable,
    row: Row,
    mode: Mode,
    generation: u64,
}

impl AutomatonEngine {
    /// Create an engine; random policies are seeded from OS entropy.
    pub fn new(rule: RuleTable, size: usize, policy: SeedPolicy) -> Result<Self> {
        Self::with_seed(rule, size, policy, None)
    }

    /// Create an engine.
    ///
    /// `seed` - random seed for the random policies (if `None`, then OS entropy
    /// is used); ignored by the deterministic ones.
    pub fn with_seed(
        rule: RuleTable,
        size: usize,
        policy: SeedPolicy,
        seed: Option<u64>,
    ) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }

        let (row, mode) = match policy {
            SeedPolicy::Explicit(row) => {
                if row.len() != size {
                    return Err(Error::DimensionMismatch {
                        expected: size,
                        actual: row.len(),
                    });
                }
                (row, Mode::RuleDriven)
            }
            SeedPolicy::SingleCenter => (Row::single_center(size), Mode::RuleDriven),
            SeedPolicy::UniformRandom => {
                let mut rng = new_rng(seed)?;
                (bernoulli_row(&mut rng, size, 0.5), Mode::RuleDriven)
            }
            SeedPolicy::SelfBiasingRandom => {
                let mut sampler = BiasedSampler::new(new_rng(seed)?);
                (sampler.first_row(size), Mode::SelfBiasing(sampler))
            }
        };
        log::info!(
            "rule {}: {} cells, {} live at start{}",
            rule.number(),
            size,
            row.population(),
            if matches!(mode, Mode::SelfBiasing(_)) {
                " (self-biasing)"
            } else {
                ""
            }
        );

        Ok(Self {
            rule,
            row,
            mode,
            generation: 0,
        })
    }

    pub fn rule(&self) -> RuleTable {
        self.rule
    }

    pub fn size(&self) -> usize {
        self.row.len()
    }

    /// Number of completed steps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        if self.generation == 0 {
            Phase::Ready
        } else {
            Phase::Stepped
        }
    }

    pub fn is_self_biasing(&self) -> bool {
        matches!(self.mode, Mode::SelfBiasing(_))
    }

    /// Probability used for the last self-biasing draw, `None` for rule-driven engines.
    pub fn bias(&self) -> Option<f64> {
        match &self.mode {
            Mode::RuleDriven => None,
            Mode::SelfBiasing(sampler) => Some(sampler.bias()),
        }
    }

    pub fn current_row(&self) -> &Row {
        &self.row
    }

    /// Advance one generation and return a copy of the new row.
    pub fn step(&mut self) -> Row {
        let next = match &mut self.mode {
            Mode::RuleDriven => Row::from_cells(apply_rule(self.rule, self.row.cells())),
            Mode::SelfBiasing(sampler) => sampler.next_row(&self.row),
        };
        self.row = next;
        self.generation += 1;
        self.row.clone()
    }

    /// Endless sequence of rows, one [`Self::step`] per item.
    pub fn rows(&mut self) -> impl Iterator<Item = Row> + '_ {
        std::iter::repeat_with(move || self.step())
    }
}

/// Next generation of `cells` with a dead cell assumed on both sides.
///
/// Keeps the current neighborhood in the low three bits of `window` and
/// shifts the next cell in, so every cell is read once.
pub fn apply_rule(rule: RuleTable, cells: &[bool]) -> Vec<bool> {
    let mut next = Vec::with_capacity(cells.len());
    let mut window = cells.first().copied().unwrap_or(false) as u8;
    for i in 0..cells.len() {
        let right = cells.get(i + 1).copied().unwrap_or(false);
        window = (window << 1 | right as u8) & 0b111;
        next.push(rule.lookup_index(window));
    }
    next
}
