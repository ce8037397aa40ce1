//! Scatter plot with marginal histograms.

/// Bin width shared by both marginal histograms.
pub const BIN_WIDTH: f64 = 0.25;

/// Symmetric bin edges covering every `|x|` and `|y|`.
///
/// The limit is the first multiple of `bin_width` strictly above the largest
/// absolute value, and edges run from `-limit` to `limit` inclusive.
pub fn histogram_edges(x: &[f64], y: &[f64], bin_width: f64) -> Vec<f64> {
    let xy_max = x
        .iter()
        .chain(y)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let limit = ((xy_max / bin_width).floor() + 1.0) * bin_width;
    let bins = (2.0 * limit / bin_width).round() as usize;
    (0..=bins).map(|k| -limit + k as f64 * bin_width).collect()
}

/// Count values per bin. Bins are half-open except the last, which is closed.
pub fn histogram_counts(values: &[f64], edges: &[f64]) -> Vec<usize> {
    let bins = edges.len().saturating_sub(1);
    let mut counts = vec![0; bins];
    if bins == 0 {
        return counts;
    }
    let first = edges[0];
    let last = edges[bins];
    for &v in values {
        if !(first..=last).contains(&v) {
            continue;
        }
        let idx = edges[1..]
            .iter()
            .position(|&upper| v < upper)
            .unwrap_or(bins - 1);
        counts[idx] += 1;
    }
    counts
}

/// Scatter data with its shared-edge marginal histograms.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterHist {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub edges: Vec<f64>,
    pub x_counts: Vec<usize>,
    pub y_counts: Vec<usize>,
}

impl ScatterHist {
    pub fn new(x: &[f64], y: &[f64]) -> Self {
        let edges = histogram_edges(x, y, BIN_WIDTH);
        Self {
            x_counts: histogram_counts(x, &edges),
            y_counts: histogram_counts(y, &edges),
            x: x.to_vec(),
            y: y.to_vec(),
            edges,
        }
    }

    /// Outer edge of the symmetric axis range.
    pub fn limit(&self) -> f64 {
        self.edges.last().copied().unwrap_or(BIN_WIDTH)
    }

    pub fn max_count(&self) -> usize {
        self.x_counts
            .iter()
            .chain(&self.y_counts)
            .copied()
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric_with_fixed_width() {
        let edges = histogram_edges(&[0.3, -1.0], &[0.5], BIN_WIDTH);
        assert_eq!(edges.len(), 11);
        assert!((edges[0] + 1.25).abs() < 1e-12);
        assert!((edges[10] - 1.25).abs() < 1e-12);
        for pair in edges.windows(2) {
            assert!((pair[1] - pair[0] - BIN_WIDTH).abs() < 1e-12);
        }
    }

    #[test]
    fn edges_for_empty_input_cover_one_bin_each_side() {
        let edges = histogram_edges(&[], &[], BIN_WIDTH);
        assert_eq!(edges, vec![-0.25, 0.0, 0.25]);
    }

    #[test]
    fn counts_use_half_open_bins() {
        let edges = [0.0, 1.0, 2.0, 3.0];
        let counts = histogram_counts(&[0.0, 0.5, 1.0, 2.5, 3.0, 3.5, -0.1], &edges);
        assert_eq!(counts, vec![2, 1, 2]);
    }

    #[test]
    fn scatter_hist_counts_every_point() {
        let x = [0.1, 0.2, -0.6, 1.9];
        let y = [0.0, -0.3, 0.4, 0.9];
        let combo = ScatterHist::new(&x, &y);
        assert_eq!(combo.x_counts.iter().sum::<usize>(), 4);
        assert_eq!(combo.y_counts.iter().sum::<usize>(), 4);
        assert!((combo.limit() - 2.0).abs() < 1e-12);
        assert_eq!(combo.max_count(), 2);
    }
}
