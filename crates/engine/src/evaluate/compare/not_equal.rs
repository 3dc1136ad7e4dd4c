// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_expression::NotEqualExpression;
use tea_type::Result;

use super::NotEqual;
use crate::evaluate::{EvaluationContext, StandardEvaluator, VarData};

impl StandardEvaluator {
	pub(crate) fn not_equal(&self, ctx: &EvaluationContext, ne: &NotEqualExpression) -> Result<VarData> {
		self.equality::<NotEqual>(ctx, ne, &ne.left, &ne.right)
	}
}

#[cfg(test)]
mod tests {
	use tea_expression::Expression;
	use tea_testing::fixture;

	use crate::evaluate;

	#[test]
	fn test_not_equal_skips_undefined() {
		let dataset = fixture::participants();
		let expr = Expression::variable("score").not_equal(Expression::literal(4.0));
		let data = evaluate(&dataset, &expr, None).unwrap().into_var_data().unwrap();

		assert_eq!(data.participants().cloned().collect::<Vec<_>>(), fixture::ids(["p1", "p3"]));
	}
}
