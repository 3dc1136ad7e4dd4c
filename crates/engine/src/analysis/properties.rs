// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use tea_dataset::{Column, DatasetAccessor};
use tea_type::{Categories, Result, Variable};
use tracing::{debug, instrument};

use crate::{
	analysis::{CombinedData, Role, RoleData, statistics},
	evaluate::VarData,
};

/// Properties of one variable's (filtered) observations.
#[derive(Debug, Clone, PartialEq)]
pub struct DataProperties {
	/// Defined observations.
	pub sample_size: usize,
	/// Undefined observations, not part of any statistic.
	pub excluded: usize,
	pub distribution: Distribution,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
	Numeric(NumericSummary),
	Categorical(CategoricalSummary),
}

/// Statistics that need more observations than available are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericSummary {
	pub mean: Option<f64>,
	pub variance: Option<f64>,
	pub standard_deviation: Option<f64>,
	pub skewness: Option<f64>,
	/// Excess kurtosis, 0 for a normal distribution.
	pub kurtosis: Option<f64>,
	pub min: Option<f64>,
	pub max: Option<f64>,
}

impl NumericSummary {
	pub fn of(values: &[f64]) -> Self {
		let variance = statistics::variance(values);
		Self {
			mean: statistics::mean(values),
			variance,
			standard_deviation: variance.map(f64::sqrt),
			skewness: statistics::skewness(values),
			kurtosis: statistics::kurtosis(values),
			min: statistics::min(values),
			max: statistics::max(values),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoricalSummary {
	/// Observations per category, in category order.
	pub counts: IndexMap<String, usize>,
	/// Most frequent category, the earliest declared one on ties.
	pub mode: Option<String>,
}

impl CategoricalSummary {
	pub fn of(categories: &Categories, column: &Column) -> Self {
		let mut counts: IndexMap<String, usize> = categories.labels().map(|label| (label.to_string(), 0)).collect();
		for value in column.values() {
			if let Some((_, count)) = categories.rank_of(value).and_then(|rank| counts.get_index_mut(rank as usize)) {
				*count += 1;
			}
		}

		let mut mode: Option<(&String, usize)> = None;
		for (label, &count) in &counts {
			if count > 0 && mode.is_none_or(|(_, best)| count > best) {
				mode = Some((label, count));
			}
		}
		let mode = mode.map(|(label, _)| label.clone());

		Self {
			counts,
			mode,
		}
	}
}

impl DataProperties {
	pub fn of(variable: &Variable, column: &Column) -> Self {
		let excluded = column.values().filter(|v| v.is_undefined()).count();

		match variable.categories().filter(|_| variable.statistical_type().is_categorical()) {
			Some(categories) => {
				let summary = CategoricalSummary::of(categories, column);
				Self {
					sample_size: summary.counts.values().sum(),
					excluded,
					distribution: Distribution::Categorical(summary),
				}
			}
			None => {
				let values = column.values().filter_map(|v| v.as_f64()).collect::<Vec<_>>();
				Self {
					sample_size: values.len(),
					excluded,
					distribution: Distribution::Numeric(NumericSummary::of(&values)),
				}
			}
		}
	}

	pub fn numeric(&self) -> Option<&NumericSummary> {
		match &self.distribution {
			Distribution::Numeric(summary) => Some(summary),
			Distribution::Categorical(_) => None,
		}
	}

	pub fn categorical(&self) -> Option<&CategoricalSummary> {
		match &self.distribution {
			Distribution::Categorical(summary) => Some(summary),
			Distribution::Numeric(_) => None,
		}
	}
}

/// Computes the properties of every role-tagged variable. Combined
/// properties are left empty, see [`compute_combined_properties`].
///
/// [`compute_combined_properties`]: crate::compute_combined_properties
#[instrument(name = "engine::analysis::compute_data_properties", level = "debug", skip_all)]
pub fn compute_data_properties(dataset: &dyn DatasetAccessor, roles: Vec<(VarData, Role)>) -> Result<CombinedData> {
	let vars = roles
		.into_iter()
		.map(|(data, role)| {
			let variable = dataset.variable(data.name())?;
			let properties = DataProperties::of(variable, &data.column);
			debug!(
				variable = data.name(),
				sample_size = properties.sample_size,
				excluded = properties.excluded,
				"data properties computed"
			);
			Ok(RoleData {
				data,
				role,
				properties,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(CombinedData::new(vars))
}
