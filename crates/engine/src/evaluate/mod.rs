// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_dataset::DatasetAccessor;
use tea_expression::Expression;
use tea_type::Result;
use tracing::instrument;

use crate::{Design, DescriptiveExecutor, EvalError, ResData, TestExecutor};

mod compare;
mod literal;
mod mean;
mod relate;
mod var_data;
mod variable;

pub use var_data::{Metadata, VarData};

/// What an expression evaluates to: filtered variable data, or the result
/// of a test for `relate`.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
	Var(VarData),
	Result(ResData),
}

impl Evaluation {
	pub fn kind(&self) -> &'static str {
		match self {
			Evaluation::Var(_) => "variable data",
			Evaluation::Result(_) => "test result",
		}
	}

	pub fn into_var_data(self) -> Option<VarData> {
		match self {
			Evaluation::Var(data) => Some(data),
			Evaluation::Result(_) => None,
		}
	}

	pub fn into_result(self) -> Option<ResData> {
		match self {
			Evaluation::Result(result) => Some(result),
			Evaluation::Var(_) => None,
		}
	}
}

pub(crate) struct EvaluationContext<'a> {
	pub(crate) dataset: &'a dyn DatasetAccessor,
	pub(crate) design: Option<&'a Design>,
}

/// Interprets expressions against a dataset. Test execution for `relate` is
/// delegated to the configured [`TestExecutor`].
pub struct StandardEvaluator {
	executor: Box<dyn TestExecutor>,
}

impl Default for StandardEvaluator {
	fn default() -> Self {
		Self::with_executor(DescriptiveExecutor)
	}
}

impl StandardEvaluator {
	pub fn with_executor(executor: impl TestExecutor + 'static) -> Self {
		Self {
			executor: Box::new(executor),
		}
	}

	pub fn executor(&self) -> &dyn TestExecutor {
		self.executor.as_ref()
	}

	#[instrument(name = "engine::evaluate", level = "debug", skip_all, fields(expression = %expr))]
	pub fn evaluate(
		&self,
		dataset: &dyn DatasetAccessor,
		expr: &Expression,
		design: Option<&Design>,
	) -> Result<Evaluation> {
		let ctx = EvaluationContext {
			dataset,
			design,
		};
		self.evaluate_expression(&ctx, expr)
	}

	pub(crate) fn evaluate_expression(&self, ctx: &EvaluationContext, expr: &Expression) -> Result<Evaluation> {
		match expr {
			Expression::Variable(e) => self.variable(ctx, e).map(Evaluation::Var),
			Expression::Literal(e) => Ok(Evaluation::Var(self.literal(ctx, e))),
			Expression::Equal(e) => self.equal(ctx, e).map(Evaluation::Var),
			Expression::NotEqual(e) => self.not_equal(ctx, e).map(Evaluation::Var),
			Expression::LessThan(e) => self.less_than(ctx, e).map(Evaluation::Var),
			Expression::LessThanEqual(e) => self.less_than_equal(ctx, e).map(Evaluation::Var),
			Expression::GreaterThan(e) => self.greater_than(ctx, e).map(Evaluation::Var),
			Expression::GreaterThanEqual(e) => self.greater_than_equal(ctx, e).map(Evaluation::Var),
			Expression::Relate(e) => self.relate(ctx, e).map(Evaluation::Result),
			Expression::Mean(e) => self.mean(ctx, e),
		}
	}

	/// Evaluates `expr`, which has to produce variable data.
	pub(crate) fn var_data(&self, ctx: &EvaluationContext, expr: &Expression) -> Result<VarData> {
		match self.evaluate_expression(ctx, expr)? {
			Evaluation::Var(data) => Ok(data),
			other => Err(EvalError::TypeMismatch {
				expression: expr.to_string(),
				found: other.kind(),
			}
			.into()),
		}
	}
}

/// Evaluates `expr` with the descriptive test executor.
pub fn evaluate(dataset: &dyn DatasetAccessor, expr: &Expression, design: Option<&Design>) -> Result<Evaluation> {
	StandardEvaluator::default().evaluate(dataset, expr, design)
}
