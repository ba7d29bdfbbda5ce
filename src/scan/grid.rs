use serde::Deserialize;

/// Evenly spaced samples between two inclusive end points.
///
/// Sampling follows the usual `linspace` convention: the step is
/// `(stop - start) / (num - 1)`, the `i`-th value is `start + i * step`,
/// and the last value is exactly `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridAxis {
    pub start: f64,
    pub stop: f64,
    pub num: usize,
}

impl GridAxis {
    pub const fn new(start: f64, stop: f64, num: usize) -> Self {
        Self { start, stop, num }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.num
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num == 0
    }

    pub fn values(&self) -> Vec<f64> {
        match self.num {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                let step = (self.stop - self.start) / (n - 1) as f64;
                let mut values: Vec<f64> = (0..n).map(|i| self.start + i as f64 * step).collect();
                values[n - 1] = self.stop;
                values
            }
        }
    }
}
