//! Enumeration of variable assignments

use crate::expression::Truth;

/// Iterator over every assignment of `width` variables
///
/// Yields one value per variable, the first variable being the most
/// significant bit. In ascending order (the default) the first row is all
/// zeros and the last all ones; reversed order starts from all ones.
///
/// Works as an odometer over the current row, so any width can be enumerated
/// without computing `2^width` up front. Zero variables yield a single empty
/// row.
///
/// # Examples
///
/// ```
/// use prop_logic::table::Assignments;
///
/// let rows: Vec<_> = Assignments::new(2, false).collect();
/// assert_eq!(rows, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
///
/// let reversed: Vec<_> = Assignments::new(2, true).collect();
/// assert_eq!(reversed.first(), Some(&vec![1, 1]));
/// ```
#[derive(Debug, Clone)]
pub struct Assignments {
    current: Option<Vec<Truth>>,
    reverse: bool,
    remaining: Option<usize>,
}

impl Assignments {
    /// Enumerate all `2^width` assignments
    pub fn new(width: usize, reverse: bool) -> Self {
        let start: Truth = if reverse { 1 } else { 0 };
        Assignments {
            current: Some(vec![start; width]),
            reverse,
            remaining: row_count(width),
        }
    }

    /// Step the odometer; returns false once every row has been produced
    fn advance(row: &mut [Truth], reverse: bool) -> bool {
        let (from, to) = if reverse { (0, 1) } else { (1, 0) };
        for cell in row.iter_mut().rev() {
            if *cell == from {
                *cell = to;
            } else {
                *cell = from;
                return true;
            }
        }
        false
    }
}

impl Iterator for Assignments {
    type Item = Vec<Truth>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.current.take()?;
        let mut next = row.clone();
        if Self::advance(&mut next, self.reverse) {
            self.current = Some(next);
        }
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.current.is_some(), self.remaining) {
            (false, _) => (0, Some(0)),
            (true, Some(n)) => (n, Some(n)),
            (true, None) => (usize::MAX, None),
        }
    }
}

/// Number of rows for `width` variables, if it fits in a `usize`
pub fn row_count(width: usize) -> Option<usize> {
    u32::try_from(width)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
}
