// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
	if values.is_empty() {
		return None;
	}
	Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance, `n - 1` in the denominator.
pub(crate) fn variance(values: &[f64]) -> Option<f64> {
	if values.len() < 2 {
		return None;
	}
	let mean = mean(values)?;
	let squares = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
	Some(squares / (values.len() - 1) as f64)
}

/// Biased central moment of the given order.
fn central_moment(values: &[f64], mean: f64, order: i32) -> f64 {
	values.iter().map(|v| (v - mean).powi(order)).sum::<f64>() / values.len() as f64
}

/// Fisher-Pearson coefficient of skewness, g1.
pub(crate) fn skewness(values: &[f64]) -> Option<f64> {
	if values.len() < 3 {
		return None;
	}
	let mean = mean(values)?;
	let m2 = central_moment(values, mean, 2);
	if m2 == 0.0 {
		return None;
	}
	Some(central_moment(values, mean, 3) / m2.powf(1.5))
}

/// Excess kurtosis, g2.
pub(crate) fn kurtosis(values: &[f64]) -> Option<f64> {
	if values.len() < 4 {
		return None;
	}
	let mean = mean(values)?;
	let m2 = central_moment(values, mean, 2);
	if m2 == 0.0 {
		return None;
	}
	Some(central_moment(values, mean, 4) / m2.powi(2) - 3.0)
}

pub(crate) fn min(values: &[f64]) -> Option<f64> {
	values.iter().copied().reduce(f64::min)
}

pub(crate) fn max(values: &[f64]) -> Option<f64> {
	values.iter().copied().reduce(f64::max)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(actual: Option<f64>, expected: f64) {
		let actual = actual.unwrap();
		assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
	}

	#[test]
	fn test_mean_and_variance() {
		let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
		close(mean(&values), 5.0);
		close(variance(&values), 32.0 / 7.0);
		assert_eq!(mean(&[]), None);
		assert_eq!(variance(&[1.0]), None);
	}

	#[test]
	fn test_skewness() {
		close(skewness(&[1.0, 2.0, 3.0]), 0.0);
		// m2 = 2, m3 = 2
		close(skewness(&[1.0, 1.0, 4.0]), 2.0 / 2.0f64.powf(1.5));
		assert_eq!(skewness(&[1.0, 2.0]), None);
		assert_eq!(skewness(&[3.0, 3.0, 3.0]), None);
	}

	#[test]
	fn test_kurtosis() {
		// m2 = 1.25, m4 = 2.5625
		close(kurtosis(&[1.0, 2.0, 3.0, 4.0]), 2.5625 / 1.5625 - 3.0);
		assert_eq!(kurtosis(&[1.0, 2.0, 3.0]), None);
	}

	#[test]
	fn test_min_max() {
		assert_eq!(min(&[3.0, -1.0, 2.0]), Some(-1.0));
		assert_eq!(max(&[3.0, -1.0, 2.0]), Some(3.0));
		assert_eq!(min(&[]), None);
	}
}
