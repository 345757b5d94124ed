use std::collections::VecDeque;

use crate::data::types::PricePoint;
use crate::engine::MIN_DATA_POINTS;

/// Bounded rolling window of price samples, oldest first.
///
/// Once full, every push evicts the oldest sample.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    points: VecDeque<PricePoint>,
    capacity: usize,
}

impl PriceHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one if the window is full.
    pub fn push(&mut self, point: PricePoint) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Snapshot of the window in chronological order.
    pub fn points(&self) -> Vec<PricePoint> {
        self.points.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.back()
    }

    /// Whether enough samples have accumulated for a verdict.
    pub fn ready(&self) -> bool {
        self.points.len() >= MIN_DATA_POINTS
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Extend<PricePoint> for PriceHistory {
    fn extend<T: IntoIterator<Item = PricePoint>>(&mut self, iter: T) {
        for point in iter {
            self.push(point);
        }
    }
}
