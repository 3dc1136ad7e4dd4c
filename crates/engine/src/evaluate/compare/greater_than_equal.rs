// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_expression::GreaterThanEqualExpression;
use tea_type::Result;

use super::GreaterThanEqual;
use crate::evaluate::{EvaluationContext, StandardEvaluator, VarData};

impl StandardEvaluator {
	pub(crate) fn greater_than_equal(&self, ctx: &EvaluationContext, ge: &GreaterThanEqualExpression) -> Result<VarData> {
		self.ordering::<GreaterThanEqual>(ctx, ge, &ge.left, &ge.right)
	}
}
