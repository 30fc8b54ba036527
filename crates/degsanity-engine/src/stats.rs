//! Small numeric helpers shared by the checks.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation: sum of squared deviations divided by
/// `n`, not `n-1`.
pub fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (ss / values.len() as f64).sqrt()
}

/// Column sums over gene-major rows; `width` is the sample count.
pub fn column_sums(rows: &[Vec<f64>], width: usize) -> Vec<f64> {
    let mut sums = vec![0.0; width];
    for row in rows {
        for (j, value) in row.iter().enumerate() {
            sums[j] += value;
        }
    }
    sums
}

/// Round to one decimal, the display precision the findings use.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_population_std_dev_divides_by_n() {
        // Sample stddev of [2, 4] would be sqrt(2); population is 1.
        assert_eq!(population_std_dev(&[2.0, 4.0], 3.0), 1.0);
    }

    #[test]
    fn test_column_sums() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]];
        assert_eq!(column_sums(&rows, 3), vec![11.0, 22.0, 33.0]);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(49.95), 50.0);
        assert_eq!(round1(0.0), 0.0);
    }
}
