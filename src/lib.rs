#![warn(clippy::all)]

mod engine;
mod error;
pub mod gui;
pub mod rule;
mod row;

pub use engine::{apply_rule, AutomatonEngine, Phase, SeedPolicy, BIAS_STEP};
pub use error::{Error, Result};
pub use row::Row;
pub use rule::RuleTable;
