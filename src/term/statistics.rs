//! Integer summary statistics

use serde::Serialize;

/// Running min/max/count/sum over integer samples.
///
/// An empty summary has no min, max or average; callers check [Statistics::count] (or the
/// `Option`s) before trusting derived values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    count: usize,
    sum: usize,
    min: Option<usize>,
    max: Option<usize>,
}

impl Statistics {
    pub fn accept(&mut self, value: usize) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |min| min.min(value)));
        self.max = Some(self.max.map_or(value, |max| max.max(value)));
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> usize {
        self.sum
    }

    pub fn min(&self) -> Option<usize> {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Floating-point mean; `None` when no samples were accepted.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum as f64 / self.count as f64)
        }
    }
}

impl FromIterator<usize> for Statistics {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut stats = Statistics::default();
        for value in iter {
            stats.accept(value);
        }
        stats
    }
}
