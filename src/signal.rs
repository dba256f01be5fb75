//! Synthetic sample generation: evenly spaced abscissa points and one
//! unnormalized Gaussian ordinate series per configured curve.

use crate::config::SamplingConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoint {
    pub sample_number: i64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoint {
    pub curve: String,
    pub sample_number: i64,
    pub value: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    pub abscissa: Vec<SamplePoint>,
    pub ordinate: Vec<CurvePoint>,
}

/// Unnormalized Gaussian bell: `exp(-0.5 * ((x - mean) / sigma)^2)`.
/// Peak value is 1 at `x == mean` regardless of sigma.
pub fn gaussian(x: f64, mean: f64, sigma: f64) -> f64 {
    (-0.5 * ((x - mean) / sigma).powi(2)).exp()
}

/// `n` evenly spaced values from `start` to `end`, endpoints included.
pub fn linspace(start: f64, end: f64, n: u32) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / f64::from(n - 1);
            (0..n).map(|i| start + f64::from(i) * step).collect()
        }
    }
}

/// Generates the full sample set for every configured curve. Sample
/// numbers start at 0 and are dense; ordinate rows are emitted in curve
/// order, ascending by sample number within each curve.
pub fn generate(sampling: &SamplingConfig) -> SampleSet {
    let xs = linspace(sampling.x_min, sampling.x_max, sampling.samples);

    let abscissa: Vec<SamplePoint> = xs
        .iter()
        .enumerate()
        .map(|(idx, x)| SamplePoint {
            sample_number: idx as i64,
            value: *x,
        })
        .collect();

    let mut ordinate = Vec::with_capacity(xs.len() * sampling.curves.len());
    for curve in &sampling.curves {
        for (idx, x) in xs.iter().enumerate() {
            ordinate.push(CurvePoint {
                curve: curve.name.clone(),
                sample_number: idx as i64,
                value: gaussian(*x, curve.mean, curve.sigma),
            });
        }
    }

    SampleSet { abscissa, ordinate }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{gaussian, generate, linspace};
    use crate::config::SamplingConfig;

    #[test]
    fn linspace_includes_both_endpoints() {
        let xs = linspace(-10.0, 10.0, 101);
        assert_eq!(xs.len(), 101);
        assert!((xs[0] - -10.0).abs() < 1e-12);
        assert!((xs[100] - 10.0).abs() < 1e-12);
        assert!((xs[50]).abs() < 1e-12);
    }

    #[test]
    fn linspace_edge_cases() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test_case(0.0, 0.0, 2.0, 1.0; "peak at mean")]
    #[test_case(-5.0, -5.0, 2.0, 1.0; "peak at shifted mean")]
    #[test_case(2.0, 0.0, 2.0, 0.6065306597126334; "one sigma out")]
    fn gaussian_values(x: f64, mean: f64, sigma: f64, expected: f64) {
        assert!((gaussian(x, mean, sigma) - expected).abs() < 1e-12);
    }

    #[test]
    fn gaussian_is_symmetric_about_mean() {
        let left = gaussian(-3.0, 1.0, 2.0);
        let right = gaussian(5.0, 1.0, 2.0);
        assert!((left - right).abs() < 1e-12);
    }

    #[test]
    fn generate_produces_dense_rows_per_curve() {
        let sampling = SamplingConfig::default();
        let set = generate(&sampling);

        assert_eq!(set.abscissa.len(), 101);
        assert_eq!(set.ordinate.len(), 101 * 3);

        for (idx, point) in set.abscissa.iter().enumerate() {
            assert_eq!(point.sample_number, idx as i64);
        }

        // Every curve contributes exactly `samples` rows, numbered 0..n.
        for curve in &sampling.curves {
            let rows: Vec<_> = set
                .ordinate
                .iter()
                .filter(|p| p.curve == curve.name)
                .collect();
            assert_eq!(rows.len(), 101);
            assert_eq!(rows[0].sample_number, 0);
            assert_eq!(rows[100].sample_number, 100);
        }
    }

    #[test]
    fn generated_curves_peak_at_their_mean() {
        let sampling = SamplingConfig::default();
        let set = generate(&sampling);

        // m0s2 peaks at x = 0, which is sample 50 of 101 over [-10, 10].
        let peak = set
            .ordinate
            .iter()
            .filter(|p| p.curve == "m0s2")
            .max_by(|a, b| a.value.total_cmp(&b.value))
            .expect("curve rows");
        assert_eq!(peak.sample_number, 50);
        assert!((peak.value - 1.0).abs() < 1e-12);
    }
}
