// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_expression::EqualExpression;
use tea_type::Result;

use super::Equal;
use crate::evaluate::{EvaluationContext, StandardEvaluator, VarData};

impl StandardEvaluator {
	pub(crate) fn equal(&self, ctx: &EvaluationContext, eq: &EqualExpression) -> Result<VarData> {
		self.equality::<Equal>(ctx, eq, &eq.left, &eq.right)
	}
}

#[cfg(test)]
mod tests {
	use tea_expression::Expression;
	use tea_testing::fixture;

	use crate::evaluate;

	#[test]
	fn test_equal_literal() {
		let dataset = fixture::participants();
		let expr = Expression::variable("sex").equal(Expression::literal("F"));
		let data = evaluate(&dataset, &expr, None).unwrap().into_var_data().unwrap();

		assert_eq!(data.participants().cloned().collect::<Vec<_>>(), fixture::ids(["p1", "p3"]));
		assert_eq!(data.query(), "sex == 'F'");
		assert_eq!(data.name(), "sex");
	}

	#[test]
	fn test_equal_numbers_across_representations() {
		let dataset = fixture::participants();
		let expr = Expression::variable("age").equal(Expression::literal(20.0));
		let data = evaluate(&dataset, &expr, None).unwrap().into_var_data().unwrap();

		assert_eq!(data.participants().cloned().collect::<Vec<_>>(), fixture::ids(["p2"]));
	}

	#[test]
	fn test_equal_filtered_variable_intersects() {
		let dataset = fixture::participants();
		let women = Expression::variable("sex").equal(Expression::literal("F"));
		let expr = Expression::variable("sex").equal(women);
		let data = evaluate(&dataset, &expr, None).unwrap().into_var_data().unwrap();

		assert_eq!(data.participants().cloned().collect::<Vec<_>>(), fixture::ids(["p1", "p3"]));
		assert_eq!(data.query(), "sex == sex");
	}
}
