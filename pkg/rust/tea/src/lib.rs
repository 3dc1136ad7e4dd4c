// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod logging;

pub use logging::{LoggingConfig, init_logging, init_logging_with};
pub use tea_dataset as dataset;
pub use tea_dataset::{Column, Dataset, DatasetAccessor, DatasetBuilder, Predicate};
pub use tea_engine as engine;
pub use tea_engine::{
	Design, DesignBuilder, EvalError, Evaluation, ResData, StandardEvaluator, StudyType, TestExecutor, VarData,
	evaluate,
};
pub use tea_expression as expression;
pub use tea_expression::Expression;
pub use tea_type::{Error, Result, StatisticalType, Value, Variable};
use tracing::instrument;

/// Evaluates a `relate` expression under `design` and returns the test
/// result. Any other expression fails with `EVAL_001`.
#[instrument(name = "tea::analyze", level = "info", skip_all, fields(expression = %expr))]
pub fn analyze(dataset: &dyn DatasetAccessor, expr: &Expression, design: &Design) -> Result<ResData> {
	match evaluate(dataset, expr, Some(design))? {
		Evaluation::Result(result) => Ok(result),
		other => Err(EvalError::TypeMismatch {
			expression: expr.to_string(),
			found: other.kind(),
		}
		.into()),
	}
}
