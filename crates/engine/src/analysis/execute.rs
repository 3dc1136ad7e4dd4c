// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use tea_dataset::DatasetAccessor;
use tea_type::Result;
use tracing::instrument;

use crate::analysis::CombinedData;

/// The outcome of running a test on combined data.
#[derive(Debug, Clone, PartialEq)]
pub struct ResData {
	pub test: String,
	/// Participants the test was run on.
	pub sample_size: usize,
	pub results: IndexMap<String, f64>,
	pub combined: CombinedData,
}

impl ResData {
	pub fn get(&self, name: &str) -> Option<f64> {
		self.results.get(name).copied()
	}
}

/// Selects and runs a test for role-tagged, property-annotated data.
pub trait TestExecutor: Send + Sync {
	fn name(&self) -> &str;

	fn execute(&self, dataset: &dyn DatasetAccessor, combined: &CombinedData) -> Result<ResData>;
}

/// Reports the computed properties without testing any hypothesis.
///
/// Results are named `sample_size`, `<variable>.mean`, `<variable>.sd` and,
/// when the data is grouped, `<variable>[<group>].mean`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptiveExecutor;

impl TestExecutor for DescriptiveExecutor {
	fn name(&self) -> &str {
		"descriptive"
	}

	#[instrument(name = "engine::analysis::descriptive", level = "debug", skip_all)]
	fn execute(&self, _dataset: &dyn DatasetAccessor, combined: &CombinedData) -> Result<ResData> {
		let mut results = IndexMap::new();
		results.insert("sample_size".to_string(), combined.properties.sample_size as f64);

		for var in &combined.vars {
			let Some(summary) = var.properties.numeric() else {
				continue;
			};
			if let Some(mean) = summary.mean {
				results.insert(format!("{}.mean", var.name()), mean);
			}
			if let Some(sd) = summary.standard_deviation {
				results.insert(format!("{}.sd", var.name()), sd);
			}
		}

		for (variable, groups) in &combined.properties.groups {
			for (group, properties) in groups {
				if let Some(mean) = properties.mean {
					results.insert(format!("{}[{}].mean", variable, group), mean);
				}
			}
		}

		Ok(ResData {
			test: self.name().to_string(),
			sample_size: combined.properties.sample_size,
			results,
			combined: combined.clone(),
		})
	}
}

#[cfg(test)]
mod tests {
	use tea_expression::Expression;
	use tea_testing::fixture;

	use crate::{Design, StandardEvaluator, evaluate};

	use super::*;

	struct Fixed;

	impl TestExecutor for Fixed {
		fn name(&self) -> &str {
			"fixed"
		}

		fn execute(&self, _dataset: &dyn DatasetAccessor, combined: &CombinedData) -> Result<ResData> {
			Ok(ResData {
				test: self.name().to_string(),
				sample_size: combined.properties.sample_size,
				results: IndexMap::from([("p".to_string(), 0.5)]),
				combined: combined.clone(),
			})
		}
	}

	fn relate() -> Expression {
		Expression::relate([Expression::variable("sex"), Expression::variable("score")])
	}

	#[test]
	fn test_descriptive_results() {
		let dataset = fixture::participants();
		let design = Design::builder().independent("sex").dependent("score").build().unwrap();
		let result = evaluate(&dataset, &relate(), Some(&design)).unwrap().into_result().unwrap();

		assert_eq!(result.get("sample_size"), Some(3.0));
		assert_eq!(result.get("score.mean"), Some(13.0 / 3.0));
		assert_eq!(result.get("score[F].mean"), Some(4.5));
		assert_eq!(result.get("score[M].mean"), Some(4.0));
		assert_eq!(result.get("sex.mean"), None);
	}

	#[test]
	fn test_custom_executor() {
		let dataset = fixture::participants();
		let design = Design::builder().independent("sex").dependent("score").build().unwrap();
		let evaluator = StandardEvaluator::with_executor(Fixed);
		let result = evaluator.evaluate(&dataset, &relate(), Some(&design)).unwrap().into_result().unwrap();

		assert_eq!(evaluator.executor().name(), "fixed");
		assert_eq!(result.test, "fixed");
		assert_eq!(result.get("p"), Some(0.5));
	}
}
