//! Column budget for a single output row.

/// Terminal columns left on the current row.
///
/// Starts at the terminal width and only ever goes down. It may dip below zero
/// when a field overflows; callers treat that as "no space left".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthBudget {
    remaining: isize,
}

impl WidthBudget {
    /// Used when the terminal size cannot be queried.
    pub const FALLBACK_WIDTH: usize = 80;

    pub fn new(columns: usize) -> Self {
        Self {
            remaining: isize::try_from(columns).unwrap_or(isize::MAX),
        }
    }

    #[inline]
    pub fn remaining(&self) -> isize {
        self.remaining
    }

    /// Remaining columns, floored at zero.
    #[inline]
    pub fn available(&self) -> usize {
        self.remaining.max(0) as usize
    }

    #[inline]
    pub fn consume(&mut self, columns: usize) {
        let columns = isize::try_from(columns).unwrap_or(isize::MAX);
        self.remaining = self.remaining.saturating_sub(columns);
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }
}

impl Default for WidthBudget {
    fn default() -> Self {
        Self::new(Self::FALLBACK_WIDTH)
    }
}
