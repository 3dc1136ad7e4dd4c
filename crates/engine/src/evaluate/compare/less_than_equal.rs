// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_expression::LessThanEqualExpression;
use tea_type::Result;

use super::LessThanEqual;
use crate::evaluate::{EvaluationContext, StandardEvaluator, VarData};

impl StandardEvaluator {
	pub(crate) fn less_than_equal(&self, ctx: &EvaluationContext, le: &LessThanEqualExpression) -> Result<VarData> {
		self.ordering::<LessThanEqual>(ctx, le, &le.left, &le.right)
	}
}

#[cfg(test)]
mod tests {
	use tea_expression::Expression;
	use tea_testing::fixture;

	use crate::evaluate;

	#[test]
	fn test_less_than_equal_includes_bound() {
		let dataset = fixture::participants();
		let expr = Expression::variable("age").less_than_equal(Expression::literal(20));
		let data = evaluate(&dataset, &expr, None).unwrap().into_var_data().unwrap();

		assert_eq!(data.participants().cloned().collect::<Vec<_>>(), fixture::ids(["p1", "p2"]));
		assert_eq!(data.query(), "age <= 20");
	}
}
