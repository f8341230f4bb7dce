use std::ops::RangeInclusive;

/// Componentwise minimum and maximum of two points.
pub fn min_max(a: (f64, f64, f64), b: (f64, f64, f64)) -> ((f64, f64, f64), (f64, f64, f64)) {
    let min = (a.0.min(b.0), a.1.min(b.1), a.2.min(b.2));
    let max = (a.0.max(b.0), a.1.max(b.1), a.2.max(b.2));
    (min, max)
}

/// A closed interval on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Moves `min` down by `low` and `max` up by `high`. Negative values pull inward.
    pub fn grow(&self, low: f64, high: f64) -> Self {
        Self {
            min: self.min - low,
            max: self.max + high,
        }
    }

    pub fn translate(&self, delta: f64) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// True if both bounds fit in block coordinates.
    pub fn within_cell_range(&self) -> bool {
        self.min >= i32::MIN as f64 && self.max <= i32::MAX as f64
    }

    /// Integer coordinates inside the interval. Saturates outside
    /// [`Span::within_cell_range`].
    pub fn cells(&self) -> RangeInclusive<i32> {
        (self.min.ceil() as i32)..=(self.max.floor() as i32)
    }

    pub fn cell_count(&self) -> usize {
        let range = self.cells();
        if range.is_empty() {
            0
        } else {
            (*range.end() as i64 - *range.start() as i64 + 1) as usize
        }
    }
}
