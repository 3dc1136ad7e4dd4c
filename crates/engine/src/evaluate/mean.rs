// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_expression::MeanExpression;
use tea_type::Result;

use crate::{
	EvalError,
	evaluate::{Evaluation, EvaluationContext, StandardEvaluator},
};

impl StandardEvaluator {
	pub(crate) fn mean(&self, ctx: &EvaluationContext, mean: &MeanExpression) -> Result<Evaluation> {
		self.var_data(ctx, &mean.var)?;
		// TODO: bootstrap a confidence interval for the mean of the operand
		Err(EvalError::NotImplemented {
			node: "mean",
			expression: mean.to_string(),
		}
		.into())
	}
}
