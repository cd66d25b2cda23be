//! Rotation State Machine
//!
//! 1-based slide index with cyclic wrap, plus the indicator set derived from it.

/// One indicator marker: the slide position it selects and whether it is the current one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    pub position: usize,
    pub active: bool,
}

/// Current slide position over a fixed, non-empty slide count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    count: usize,
}

impl Rotation {
    /// Start at slide 1. Returns `None` for an empty slideshow.
    pub fn new(count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self { index: 1, count })
    }

    pub fn current(&self) -> usize {
        self.index
    }

    /// Number of slides being rotated
    pub fn slide_count(&self) -> usize {
        self.count
    }

    /// Move to the next slide, wrapping from the last back to the first
    pub fn advance(&mut self) -> usize {
        self.goto(self.index as isize + 1)
    }

    /// Jump to an absolute position.
    ///
    /// Anything past the last slide lands on the first, anything below 1 lands
    /// on the last.
    pub fn goto(&mut self, n: isize) -> usize {
        self.index = if n > self.count as isize {
            1
        } else if n < 1 {
            self.count
        } else {
            n as usize
        };
        self.index
    }

    /// One indicator per slide, the current one flagged active
    pub fn indicators(&self) -> Vec<Indicator> {
        (1..=self.count)
            .map(|position| Indicator {
                position,
                active: position == self.index,
            })
            .collect()
    }
}
