// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_expression::LessThanExpression;
use tea_type::Result;

use super::LessThan;
use crate::evaluate::{EvaluationContext, StandardEvaluator, VarData};

impl StandardEvaluator {
	pub(crate) fn less_than(&self, ctx: &EvaluationContext, lt: &LessThanExpression) -> Result<VarData> {
		self.ordering::<LessThan>(ctx, lt, &lt.left, &lt.right)
	}
}
