// src/stats/density.rs

use crate::error::{EdaError, Result};
use serde::Serialize;
use statrs::distribution::{Continuous, Normal};
use statrs::statistics::Statistics;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn center(&self) -> f64 {
        0.5 * (self.start + self.end)
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
        (lo.min(x), hi.max(x))
    }))
}

/// Equal-width bins over `[min, max]`. Every bin is half-open except the
/// last, which also takes `max`. A single distinct value gets a unit-wide range.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some((mut lo, mut hi)) = min_max(values) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &x in values {
        let idx = (((x - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

/// Scott's rule: sample standard deviation times n^(-1/5).
pub fn scott_bandwidth(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    values.iter().std_dev() * n.powf(-0.2)
}

/// Gaussian kernel density on `points` evenly spaced x values over the data
/// range, multiplied by `scale`. Pass `count * bin_width` as the scale to
/// overlay the curve on a count histogram.
///
/// Empty when there are fewer than two values or no spread.
pub fn gaussian_kde(values: &[f64], points: usize, scale: f64) -> Result<Vec<(f64, f64)>> {
    if values.len() < 2 || points == 0 {
        return Ok(Vec::new());
    }
    let bandwidth = scott_bandwidth(values);
    if bandwidth == 0.0 || !bandwidth.is_finite() {
        return Ok(Vec::new());
    }
    let Some((lo, hi)) = min_max(values) else {
        return Ok(Vec::new());
    };

    let kernel = Normal::new(0.0, 1.0).map_err(|e| EdaError::Stats(e.to_string()))?;
    let n = values.len() as f64;
    let step = if points > 1 { (hi - lo) / (points - 1) as f64 } else { 0.0 };

    let curve = (0..points)
        .map(|i| {
            let x = lo + step * i as f64;
            let density = values
                .iter()
                .map(|&xi| kernel.pdf((x - xi) / bandwidth))
                .sum::<f64>()
                / (n * bandwidth);
            (x, density * scale)
        })
        .collect();
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_every_value() {
        let values = [1.0, 2.0, 2.5, 3.0, 10.0, 10.0];
        let bins = histogram(&values, 3);
        assert_eq!(bins.len(), 3);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].start, 1.0);
        assert_eq!(bins[2].end, 10.0);
        assert_eq!(bins[2].count, 2, "The maximum lands in the last bin.");
    }

    #[test]
    fn histogram_of_constant_values() {
        let bins = histogram(&[5.0, 5.0], 4);
        assert_eq!(bins.first().unwrap().start, 4.5);
        assert_eq!(bins.last().unwrap().end, 5.5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn histogram_of_nothing_is_empty() {
        assert!(histogram(&[], 30).is_empty());
        assert!(histogram(&[1.0], 0).is_empty());
    }

    #[test]
    fn kde_integrates_to_roughly_scale() {
        // Arrange
        let values: Vec<f64> = (0..200).map(|i| i as f64).collect();

        // Act
        let curve = gaussian_kde(&values, 400, 1.0).unwrap();

        // Assert: trapezoid area over the data range, tails excluded.
        let area: f64 = curve.windows(2).map(|w| (w[1].0 - w[0].0) * 0.5 * (w[0].1 + w[1].1)).sum();
        assert_eq!(curve.len(), 400);
        assert!(area > 0.85 && area < 1.0, "area was {area}");
    }

    #[test]
    fn kde_needs_spread() {
        assert!(gaussian_kde(&[1.0], 10, 1.0).unwrap().is_empty());
        assert!(gaussian_kde(&[2.0, 2.0, 2.0], 10, 1.0).unwrap().is_empty());
    }
}
