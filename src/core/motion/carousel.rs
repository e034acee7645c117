/// Index of the active slide in an auto-rotating showcase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideCycle {
    len: usize,
    active: usize,
}

impl SlideCycle {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next slide, wrapping at the end
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
        self.active
    }

    /// Jump to a slide picked by the user. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.len {
            self.active = index;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut cycle = SlideCycle::new(3);
        assert_eq!(cycle.advance(), 1);
        assert_eq!(cycle.advance(), 2);
        assert_eq!(cycle.advance(), 0);
    }

    #[test]
    fn test_select() {
        let mut cycle = SlideCycle::new(3);
        assert_eq!(cycle.select(2), 2);
        assert_eq!(cycle.select(7), 2);
        assert_eq!(cycle.advance(), 0);
    }

    #[test]
    fn test_empty_cycle_stays_at_zero() {
        let mut cycle = SlideCycle::new(0);
        assert!(cycle.is_empty());
        assert_eq!(cycle.advance(), 0);
        assert_eq!(cycle.select(0), 0);
    }
}
