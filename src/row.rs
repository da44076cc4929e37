use crate::{Error, Result};
use std::{fmt, str::FromStr};

/// One generation of a 1D automaton: `true` is a live cell.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Row(Vec<bool>);

impl Row {
    pub fn dead(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// A single live cell at `len / 2`, the usual starting point for
    /// looking at how a rule grows.
    pub fn single_center(len: usize) -> Self {
        let mut row = Self::dead(len);
        if len != 0 {
            row.0[len / 2] = true;
        }
        row
    }

    pub fn from_cells(cells: Vec<bool>) -> Self {
        Self(cells)
    }

    /// Any non-zero value is a live cell.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self(bits.iter().map(|&b| b != 0).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cells(&self) -> &[bool] {
        &self.0
    }

    pub fn get(&self, i: usize) -> Option<bool> {
        self.0.get(i).copied()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.0.iter().filter(|&&c| c).count()
    }

    /// Fraction of live cells; an empty row has density 0.
    pub fn density(&self) -> f64 {
        if self.0.is_empty() {
            0.
        } else {
            self.population() as f64 / self.0.len() as f64
        }
    }
}

impl FromStr for Row {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .chars()
            .map(|c| match c {
                '1' | '#' => Ok(true),
                '0' | '.' => Ok(false),
                other => Err(Error::ParseRow(other)),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .0
            .iter()
            .map(|&c| if c { '#' } else { '.' })
            .collect::<String>();
        f.write_str(&s)
    }
}
