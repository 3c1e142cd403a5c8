/// Current spread index, bounded by the spread count.
///
/// Moving past either end is a no-op. A layout change only ever lowers the
/// index, and only when it would otherwise be out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadNavigator {
    current: usize,
    total: usize,
}

impl SpreadNavigator {
    /// Start at spread 0. A total of 0 is treated as 1.
    pub fn new(total_spreads: usize) -> Self {
        Self {
            current: 0,
            total: total_spreads.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.total
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    /// Advance one spread. Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Go back one spread. Returns whether the index moved.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to a spread, clamped into range
    pub fn jump_to(&mut self, spread: usize) {
        self.current = spread.min(self.total - 1);
    }

    /// Adopt a new spread count and clamp the index into it.
    ///
    /// The index is kept, not remapped: after a mobile/desktop switch the
    /// same index can show different pages.
    pub fn on_layout_changed(&mut self, new_total_spreads: usize) {
        self.total = new_total_spreads.max(1);
        self.current = self.current.min(self.total - 1);
    }
}

impl Default for SpreadNavigator {
    fn default() -> Self {
        Self::new(1)
    }
}
