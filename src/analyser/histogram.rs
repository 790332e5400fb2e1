use serde::Serialize;

/// Equal-width histogram. Each bin is `(centre, count)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bin_width: f64,
    pub bins: Vec<(f64, usize)>,
}

impl Histogram {
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.1).sum()
    }
}

/// Splits the finite values into `bins` equal-width bins spanning
/// `[min, max]`. The last bin is closed on the right. A zero-width range
/// `v..v` is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram(values: &[f64], bins: usize) -> Histogram {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Histogram {
            bin_width: 0.0,
            bins: Vec::new(),
        };
    }

    let mut min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        min -= 0.5;
        max += 0.5;
    }

    let bin_width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in finite {
        let idx = (((v - min) / bin_width).floor() as usize).min(bins - 1);
        if let Some(count) = counts.get_mut(idx) {
            *count += 1;
        }
    }

    Histogram {
        bin_width,
        bins: counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| (min + (i as f64 + 0.5) * bin_width, count))
            .collect(),
    }
}
