// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_expression::GreaterThanExpression;
use tea_type::Result;

use super::GreaterThan;
use crate::evaluate::{EvaluationContext, StandardEvaluator, VarData};

impl StandardEvaluator {
	pub(crate) fn greater_than(&self, ctx: &EvaluationContext, gt: &GreaterThanExpression) -> Result<VarData> {
		self.ordering::<GreaterThan>(ctx, gt, &gt.left, &gt.right)
	}
}

#[cfg(test)]
mod tests {
	use tea_expression::Expression;
	use tea_testing::fixture;

	use crate::evaluate;

	#[test]
	fn test_greater_than_nominal_is_rejected() {
		let dataset = fixture::participants();
		let expr = Expression::variable("sex").greater_than(Expression::literal("F"));
		let err = evaluate(&dataset, &expr, None).unwrap_err();

		assert_eq!(err.code(), "EVAL_002");
		assert!(err.message.contains(">"));
	}

	#[test]
	fn test_chained_filters_intersect() {
		let dataset = fixture::participants();
		let expr = Expression::variable("age")
			.greater_than(Expression::literal(10))
			.less_than_equal(Expression::literal(30));
		let data = evaluate(&dataset, &expr, None).unwrap().into_var_data().unwrap();

		assert_eq!(data.participants().cloned().collect::<Vec<_>>(), fixture::ids(["p2", "p3"]));
		assert_eq!(data.query(), "age > 10 & age <= 30");
	}
}
