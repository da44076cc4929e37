use crate::{Error, Result, Row};

/// The last `height` rows of a run, oldest first.
///
/// Rows fill the buffer from the top; once it is full every push scrolls the
/// contents up by one line and writes the new row at the bottom.
pub struct HistoryBuffer {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    filled: usize,
}

impl HistoryBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSize);
        }
        let len = width.checked_mul(height).ok_or(Error::InvalidSize)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
            filled: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of rows pushed so far, capped at `height`.
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.height
    }

    pub fn push(&mut self, row: &Row) {
        debug_assert_eq!(row.len(), self.width);
        let line = if self.is_full() {
            self.cells.copy_within(self.width.., 0);
            self.height - 1
        } else {
            self.filled += 1;
            self.filled - 1
        };
        let start = line * self.width;
        self.cells[start..start + self.width].copy_from_slice(row.cells());
    }

    /// Cells of line `y`; lines that were never written are all dead.
    pub fn line(&self, y: usize) -> &[bool] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// All `width * height` cells, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(s: &str) -> Row {
        s.parse().unwrap()
    }

    #[test]
    fn test_fills_top_down() {
        let mut history = HistoryBuffer::new(3, 3).unwrap();
        assert!(history.is_empty());

        history.push(&row("100"));
        history.push(&row("010"));

        assert_eq!(history.len(), 2);
        assert!(!history.is_full());
        assert_eq!(history.line(0), row("100").cells());
        assert_eq!(history.line(1), row("010").cells());
        assert_eq!(history.line(2), row("000").cells());
    }

    #[test]
    fn test_scrolls_when_full() {
        let mut history = HistoryBuffer::new(3, 2).unwrap();
        for s in ["100", "010", "001", "111"] {
            history.push(&row(s));
        }
        assert_eq!(history.len(), 2);
        assert!(history.is_full());
        assert_eq!(history.line(0), row("001").cells());
        assert_eq!(history.line(1), row("111").cells());
    }

    #[test]
    fn test_single_line() {
        let mut history = HistoryBuffer::new(2, 1).unwrap();
        history.push(&row("10"));
        history.push(&row("01"));
        assert_eq!(history.cells(), row("01").cells());
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(HistoryBuffer::new(0, 5), Err(Error::InvalidSize)));
        assert!(matches!(HistoryBuffer::new(5, 0), Err(Error::InvalidSize)));
    }

    #[test]
    fn test_overflowing_dimensions() {
        assert!(matches!(
            HistoryBuffer::new(usize::MAX / 2, 4),
            Err(Error::InvalidSize)
        ));
        assert!(matches!(
            HistoryBuffer::new(3, usize::MAX),
            Err(Error::InvalidSize)
        ));
    }

    #[test]
    #[should_panic]
    fn test_wrong_width() {
        let mut history = HistoryBuffer::new(3, 2).unwrap();
        history.push(&row("10"));
    }
}
