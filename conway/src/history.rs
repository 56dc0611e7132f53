// history.rs - Detects a board that has settled into a still life or short cycle

use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LEN: usize = 10;

/// Ring of the most recent grid fingerprints.
#[derive(Debug, Clone)]
pub struct RepeatDetector {
    seen: VecDeque<u64>,
    capacity: usize,
}

impl Default for RepeatDetector {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN)
    }
}

impl RepeatDetector {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { seen: VecDeque::with_capacity(capacity), capacity }
    }

    /// Records `fingerprint`, returning true if it is already in the window.
    pub fn observe(&mut self, fingerprint: u64) -> bool {
        if self.seen.contains(&fingerprint) {
            return true;
        }
        if self.seen.len() == self.capacity {
            self.seen.pop_front();
        }
        self.seen.push_back(fingerprint);
        false
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
