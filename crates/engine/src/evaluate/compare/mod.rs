// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use tea_dataset::Column;
use tea_expression::Expression;
use tea_type::{Operator, Result, StatisticalType, Value};
use tracing::debug;

use crate::{
	EvalError,
	evaluate::{EvaluationContext, StandardEvaluator, VarData},
};

mod equal;
mod greater_than;
mod greater_than_equal;
mod less_than;
mod less_than_equal;
mod not_equal;
mod ordinal;

pub(crate) trait Comparison {
	const OPERATOR: Operator;
}

pub(crate) struct Equal;
pub(crate) struct NotEqual;
pub(crate) struct LessThan;
pub(crate) struct LessThanEqual;
pub(crate) struct GreaterThan;
pub(crate) struct GreaterThanEqual;

impl Comparison for Equal {
	const OPERATOR: Operator = Operator::Equal;
}

impl Comparison for NotEqual {
	const OPERATOR: Operator = Operator::NotEqual;
}

impl Comparison for LessThan {
	const OPERATOR: Operator = Operator::LessThan;
}

impl Comparison for LessThanEqual {
	const OPERATOR: Operator = Operator::LessThanEqual;
}

impl Comparison for GreaterThan {
	const OPERATOR: Operator = Operator::GreaterThan;
}

impl Comparison for GreaterThanEqual {
	const OPERATOR: Operator = Operator::GreaterThanEqual;
}

impl StandardEvaluator {
	/// `==` and `!=`: keeps the left rows whose participant exists on the
	/// right side with an (un)equal value.
	pub(crate) fn equality<C: Comparison>(
		&self,
		ctx: &EvaluationContext,
		node: &dyn Display,
		left: &Expression,
		right: &Expression,
	) -> Result<VarData> {
		let lhs = self.filtered_side(ctx, node, left)?;
		let rhs = self.bound_side(ctx, node, right)?;
		let wanted = C::OPERATOR == Operator::Equal;

		let column = lhs.column.filter(|participant, value| {
			Ok(rhs.column.get(participant).and_then(|other| value.is_equal(other)) == Some(wanted))
		})?;

		Ok(self.filtered(ctx, &lhs, column, C::OPERATOR, &rhs))
	}

	/// `<`, `<=`, `>` and `>=`: the right side supplies a single bound, the
	/// left side's statistical type decides how values compare to it.
	pub(crate) fn ordering<C: Comparison>(
		&self,
		ctx: &EvaluationContext,
		node: &dyn Display,
		left: &Expression,
		right: &Expression,
	) -> Result<VarData> {
		let lhs = self.filtered_side(ctx, node, left)?;
		let statistical_type = lhs.statistical_type().ok_or_else(|| untyped(node))?;
		if statistical_type == StatisticalType::Nominal {
			return Err(EvalError::InvalidComparison {
				operator: C::OPERATOR,
				variable: lhs.name().to_string(),
				statistical_type,
				expression: node.to_string(),
			}
			.into());
		}

		let rhs = self.bound_side(ctx, node, right)?;
		let bound = bound(node, &rhs)?;

		let column = match statistical_type {
			StatisticalType::Ordinal => ordinal::compare::<C>(node, &lhs, &bound)?,
			_ => compare_numeric::<C>(node, &lhs, statistical_type, &bound)?,
		};

		Ok(self.filtered(ctx, &lhs, column, C::OPERATOR, &rhs))
	}

	/// The side being filtered has to name a typed variable.
	fn filtered_side(&self, ctx: &EvaluationContext, node: &dyn Display, left: &Expression) -> Result<VarData> {
		let data = self.var_data(ctx, left)?;
		if data.statistical_type().is_none() {
			return Err(untyped(node));
		}
		Ok(data)
	}

	fn bound_side(&self, ctx: &EvaluationContext, node: &dyn Display, right: &Expression) -> Result<VarData> {
		match right {
			Expression::Relate(_) | Expression::Mean(_) => Err(EvalError::UnsupportedOperand {
				operand: right.to_string(),
				expression: node.to_string(),
			}
			.into()),
			_ => self.var_data(ctx, right),
		}
	}

	fn filtered(&self, ctx: &EvaluationContext, lhs: &VarData, column: Column, operator: Operator, rhs: &VarData) -> VarData {
		let fragment = format!("{} {} {}", lhs.name(), operator, describe_bound(rhs));
		VarData::new(column.with_index_name(ctx.dataset.participant_column()), lhs.metadata.filtered(&fragment))
	}
}

fn untyped(node: &dyn Display) -> tea_type::Error {
	EvalError::MalformedRelation {
		expression: node.to_string(),
		reason: "the left side has no statistical type".to_string(),
	}
	.into()
}

fn describe_bound(rhs: &VarData) -> String {
	match &rhs.metadata.value {
		Some(value) => value.to_literal(),
		None => rhs.name().to_string(),
	}
}

/// The literal itself, otherwise the first defined value of the right
/// column in participant order.
fn bound(node: &dyn Display, rhs: &VarData) -> Result<Value> {
	if let Some(value) = &rhs.metadata.value {
		return Ok(value.clone());
	}
	rhs.column.values().find(|v| !v.is_undefined()).cloned().ok_or_else(|| {
		EvalError::EmptyBound {
			operand: rhs.name().to_string(),
			expression: node.to_string(),
		}
		.into()
	})
}

fn compare_numeric<C: Comparison>(
	node: &dyn Display,
	lhs: &VarData,
	statistical_type: StatisticalType,
	bound: &Value,
) -> Result<Column> {
	if bound.as_f64().is_none() {
		return Err(EvalError::UnsupportedBound {
			variable: lhs.name().to_string(),
			statistical_type,
			bound: bound.clone(),
			kind: bound.kind(),
			expression: node.to_string(),
		}
		.into());
	}

	lhs.column.filter(|participant, value| {
		if !value.is_number() {
			debug!(variable = lhs.name(), %participant, %value, "dropping non-numeric row");
			return Ok(false);
		}
		Ok(value.compare(bound).is_some_and(|ordering| C::OPERATOR.accepts(ordering)))
	})
}

#[cfg(test)]
mod tests {
	use tea_dataset::Dataset;
	use tea_expression::Expression;
	use tea_testing::fixture;
	use tea_type::{Value, Variable};

	use crate::evaluate;

	fn participants(expr: &Expression) -> Vec<Value> {
		let dataset = fixture::participants();
		let data = evaluate(&dataset, expr, None).unwrap().into_var_data().unwrap();
		data.participants().cloned().collect()
	}

	#[test]
	fn test_bound_from_variable_uses_first_value() {
		// bound is p1's age, 10
		let expr = Expression::variable("age").greater_than(Expression::variable("age"));
		assert_eq!(participants(&expr), fixture::ids(["p2", "p3", "p4"]));
	}

	#[test]
	fn test_bound_from_filtered_variable() {
		// bound is the first remaining age, 20
		let adults = Expression::variable("age").greater_than_equal(Expression::literal(20));
		let expr = Expression::variable("age").greater_than(adults);
		assert_eq!(participants(&expr), fixture::ids(["p3", "p4"]));
	}

	#[test]
	fn test_empty_bound() {
		let dataset = fixture::participants();
		let nobody = Expression::variable("age").greater_than(Expression::literal(100));
		let expr = Expression::variable("age").less_than(nobody);

		let err = evaluate(&dataset, &expr, None).unwrap_err();
		assert_eq!(err.code(), "EVAL_008");
	}

	#[test]
	fn test_literal_left_side_is_malformed() {
		let dataset = fixture::participants();
		let expr = Expression::literal(3).less_than(Expression::variable("age"));

		let err = evaluate(&dataset, &expr, None).unwrap_err();
		assert_eq!(err.code(), "EVAL_003");
	}

	#[test]
	fn test_unsupported_operand() {
		let dataset = fixture::participants();
		let expr = Expression::variable("age").less_than(Expression::mean(Expression::variable("age")));

		let err = evaluate(&dataset, &expr, None).unwrap_err();
		assert_eq!(err.code(), "EVAL_006");
	}

	#[test]
	fn test_numeric_bound_required() {
		let dataset = fixture::participants();
		let expr = Expression::variable("age").less_than(Expression::literal("old"));

		let err = evaluate(&dataset, &expr, None).unwrap_err();
		assert_eq!(err.code(), "EVAL_004");
	}

	#[test]
	fn test_large_integers_compare_exactly() {
		let dataset = Dataset::builder("id")
			.variable(Variable::interval("n"))
			.row(1, [("n", 9_007_199_254_740_993i64)])
			.row(2, [("n", 9_007_199_254_740_992i64)])
			.build()
			.unwrap();
		let expr = Expression::variable("n").greater_than(Expression::literal(9_007_199_254_740_992i64));

		let data = evaluate(&dataset, &expr, None).unwrap().into_var_data().unwrap();
		assert_eq!(data.participants().cloned().collect::<Vec<_>>(), vec![Value::int8(1)]);
	}

	#[test]
	fn test_nominal_rejected_before_right_side() {
		let dataset = fixture::participants();
		let exprs = [
			Expression::variable("sex").less_than(Expression::variable("age").greater_than(Expression::literal(100))),
			Expression::variable("sex").greater_than_equal(Expression::mean(Expression::variable("age"))),
		];

		for expr in exprs {
			let err = evaluate(&dataset, &expr, None).unwrap_err();
			assert_eq!(err.code(), "EVAL_002", "{expr}");
		}
	}

	#[test]
	fn test_undefined_rows_are_dropped() {
		let expr = Expression::variable("score").greater_than(Expression::literal(0));
		assert_eq!(participants(&expr), fixture::ids(["p1", "p2", "p3"]));
	}

	#[test]
	fn test_result_is_indexed_by_participant_column() {
		let dataset = fixture::participants();
		let expr = Expression::variable("age").less_than(Expression::literal(25));
		let data = evaluate(&dataset, &expr, None).unwrap().into_var_data().unwrap();

		assert_eq!(data.column.index_name(), "pid");
		assert_eq!(data.query(), "age < 25");
	}
}
