use crate::{Error, Result};
use std::{fmt, str::FromStr};

/// Chaotic; its center column is a decent pseudo-random stream.
pub const RULE_30: u8 = 30;
/// Sierpinski triangle from a single cell.
pub const RULE_90: u8 = 90;
/// Turing complete.
pub const RULE_110: u8 = 110;
/// Traffic flow: every live cell moves right if the cell ahead is free.
pub const RULE_184: u8 = 184;

/// Transition table of an elementary cellular automaton.
///
/// # Bit order
///
/// A neighborhood `(left, center, right)` is read as the 3-bit number
/// `left << 2 | center << 1 | right`, so the leftmost cell is the most
/// significant bit. Bit `i` of the rule number is the next state of a cell
/// whose neighborhood has value `i`:
///
/// ```text
/// neighborhood  111 110 101 100 011 010 001 000
/// rule 110        0   1   1   0   1   1   1   0   (0b0110_1110)
/// ```
///
/// Reading the rule number from its most significant bit down gives the
/// classic table that lists patterns from `111` to `000`, so both common ways
/// of writing the table describe the same automaton.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RuleTable {
    number: u8,
}

impl RuleTable {
    /// Builds the table for `rule_number`, which must lie in `0..=255`.
    pub fn new(rule_number: i64) -> Result<Self> {
        u8::try_from(rule_number)
            .map(Self::from)
            .map_err(|_| Error::InvalidRule(rule_number))
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Next state of the middle cell of `(left, center, right)`.
    #[inline]
    pub fn lookup(&self, left: bool, center: bool, right: bool) -> bool {
        self.lookup_index((left as u8) << 2 | (center as u8) << 1 | right as u8)
    }

    /// Same as [`Self::lookup`], with the neighborhood already packed into `0..8`.
    #[inline]
    pub fn lookup_index(&self, neighborhood: u8) -> bool {
        debug_assert!(neighborhood < 8);
        self.number >> neighborhood & 1 == 1
    }

    /// Outputs indexed by neighborhood value.
    pub fn outputs(&self) -> [bool; 8] {
        std::array::from_fn(|i| self.lookup_index(i as u8))
    }
}

impl From<u8> for RuleTable {
    fn from(number: u8) -> Self {
        Self { number }
    }
}

impl FromStr for RuleTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let number = s
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::ParseRule(s.to_string()))?;
        Self::new(number)
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..8u8).rev() {
            write!(f, "{:03b}:{}", i, self.lookup_index(i) as u8)?;
            if i != 0 {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_numbers_are_valid() {
        for r in 0..=255 {
            let rule = RuleTable::new(r).unwrap();
            assert_eq!(rule.number() as i64, r);
            for i in 0..8u8 {
                let (l, c, r) = (i & 4 != 0, i & 2 != 0, i & 1 != 0);
                assert_eq!(rule.lookup(l, c, r), rule.outputs()[i as usize]);
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(RuleTable::new(256), Err(Error::InvalidRule(256))));
        assert!(matches!(RuleTable::new(-1), Err(Error::InvalidRule(-1))));
    }

    #[test]
    fn test_matches_descending_pattern_table() {
        // the "111, 110, ..., 000" scaffold zipped with the 8-digit binary form
        const SCAFFOLD: [&str; 8] = ["111", "110", "101", "100", "011", "010", "001", "000"];
        for number in [RULE_30, RULE_90, RULE_110, RULE_184] {
            let rule = RuleTable::from(number);
            let binary = format!("{:08b}", number);
            for (pattern, bit) in SCAFFOLD.iter().zip(binary.chars()) {
                let cells = pattern.chars().map(|c| c == '1').collect::<Vec<_>>();
                assert_eq!(
                    rule.lookup(cells[0], cells[1], cells[2]),
                    bit == '1',
                    "rule {} pattern {}",
                    number,
                    pattern
                );
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RuleTable::from(RULE_110).to_string(),
            "111:0 110:1 101:1 100:0 011:1 010:1 001:1 000:0"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("184".parse::<RuleTable>().unwrap().number(), 184);
        assert!(matches!("300".parse::<RuleTable>(), Err(Error::InvalidRule(300))));
        assert!(matches!("abc".parse::<RuleTable>(), Err(Error::ParseRule(_))));
    }
}
