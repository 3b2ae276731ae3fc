//! Descriptive statistics over generated samples, used to eyeball that a
//! stream is plausibly uniform.

use crate::{Canonical, SamplingError};

/// Location and spread of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divides by `count`).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn from_samples<T: Canonical>(samples: &[T]) -> Result<Self, SamplingError> {
        if samples.is_empty() {
            return Err(SamplingError::EmptySample);
        }

        let n = samples.len() as f64;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for x in samples.iter().map(|s| s.to_f64()) {
            sum += x;
            min = min.min(x);
            max = max.max(x);
        }
        let mean = sum / n;

        let variance = samples
            .iter()
            .map(|s| {
                let d = s.to_f64() - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Ok(Summary {
            count: samples.len(),
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }
}

/// Equal-width bin counts over `[low, high]`.
///
/// Bins are half-open except the last, which also takes values equal to
/// `high`. Values outside the range are not counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    low: f64,
    high: f64,
    counts: Vec<usize>,
}

impl Histogram {
    pub fn build<T: Canonical>(
        samples: &[T],
        bins: usize,
        low: f64,
        high: f64,
    ) -> Result<Self, SamplingError> {
        if bins == 0 {
            return Err(SamplingError::NoBins);
        }
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(SamplingError::InvalidRange { low, high });
        }

        let width = (high - low) / bins as f64;
        let mut counts = vec![0; bins];
        for x in samples.iter().map(|s| s.to_f64()) {
            if !(low..=high).contains(&x) {
                continue;
            }
            let index = (((x - low) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        Ok(Histogram { low, high, counts })
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of samples that fell inside the range.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.counts.len() as f64
    }

    /// Lower and upper edge of bin `index`.
    pub fn bin_edges(&self, index: usize) -> (f64, f64) {
        let width = self.bin_width();
        let start = self.low + width * index as f64;
        (start, start + width)
    }

    /// Counts normalised so the histogram integrates to one.
    pub fn densities(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }
        let scale = 1.0 / (total as f64 * self.bin_width());
        self.counts.iter().map(|&c| c as f64 * scale).collect()
    }
}
