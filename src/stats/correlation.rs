// src/stats/correlation.rs

use crate::table::{ColumnKind, Table};
use serde::Serialize;
use statrs::statistics::Statistics;

/// Pairwise Pearson correlations between the numeric columns of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    /// Row-major, `labels.len()` square. `None` where undefined.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == row)?;
        let j = self.labels.iter().position(|l| l == col)?;
        self.values[i][j]
    }
}

/// Pearson correlation over the rows where both sides are present.
///
/// Fewer than two such rows, or a constant side, gives `None`.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let (a, b): (Vec<f64>, Vec<f64>) = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .unzip();
    if a.len() < 2 {
        return None;
    }
    let sa = a.iter().std_dev();
    let sb = b.iter().std_dev();
    if sa == 0.0 || sb == 0.0 || !sa.is_finite() || !sb.is_finite() {
        return None;
    }
    let r = a.iter().covariance(b.iter()) / (sa * sb);
    Some(r.clamp(-1.0, 1.0))
}

/// Correlates every numeric column with every other, derived columns included.
pub fn correlation_matrix(table: &Table) -> CorrelationMatrix {
    let numeric: Vec<_> = table
        .columns()
        .iter()
        .filter(|c| c.kind() == ColumnKind::Numeric)
        .collect();
    let series: Vec<Vec<Option<f64>>> = numeric.iter().map(|c| c.numbers()).collect();

    let n = numeric.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson(&series[i], &series[j]);
            // A non-constant column is perfectly correlated with itself.
            let r = if i == j { r.map(|_| 1.0) } else { r };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        labels: numeric.iter().map(|c| c.name.clone()).collect(),
        values,
    }
}
