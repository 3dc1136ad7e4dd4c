// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tea_type::{Operator, Value};

/// The declarative language the evaluator interprets.
///
/// By convention the left side of a comparison is the variable being
/// filtered and the right side supplies the bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
	Variable(VariableExpression),

	Literal(LiteralExpression),

	Equal(EqualExpression),

	NotEqual(NotEqualExpression),

	LessThan(LessThanExpression),

	LessThanEqual(LessThanEqualExpression),

	GreaterThan(GreaterThanExpression),

	GreaterThanEqual(GreaterThanEqualExpression),

	Relate(RelateExpression),

	Mean(MeanExpression),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableExpression(pub String);

impl VariableExpression {
	pub fn name(&self) -> &str {
		&self.0
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralExpression(pub Value);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqualExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotEqualExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessThanExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessThanEqualExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreaterThanExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreaterThanEqualExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

/// Relates variables to each other; turns a list of (filtered) variables
/// into an analysis. Predictions are carried along to test execution
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelateExpression {
	pub vars: Vec<Expression>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub predictions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanExpression {
	pub var: Box<Expression>,
}

impl Expression {
	pub fn variable(name: impl Into<String>) -> Self {
		Expression::Variable(VariableExpression(name.into()))
	}

	pub fn literal(value: impl Into<Value>) -> Self {
		Expression::Literal(LiteralExpression(value.into()))
	}

	pub fn relate(vars: impl IntoIterator<Item = Expression>) -> Self {
		Expression::Relate(RelateExpression {
			vars: vars.into_iter().collect(),
			predictions: vec![],
		})
	}

	pub fn mean(var: Expression) -> Self {
		Expression::Mean(MeanExpression {
			var: Box::new(var),
		})
	}

	pub fn equal(self, right: Expression) -> Self {
		Expression::Equal(EqualExpression {
			left: Box::new(self),
			right: Box::new(right),
		})
	}

	pub fn not_equal(self, right: Expression) -> Self {
		Expression::NotEqual(NotEqualExpression {
			left: Box::new(self),
			right: Box::new(right),
		})
	}

	pub fn less_than(self, right: Expression) -> Self {
		Expression::LessThan(LessThanExpression {
			left: Box::new(self),
			right: Box::new(right),
		})
	}

	pub fn less_than_equal(self, right: Expression) -> Self {
		Expression::LessThanEqual(LessThanEqualExpression {
			left: Box::new(self),
			right: Box::new(right),
		})
	}

	pub fn greater_than(self, right: Expression) -> Self {
		Expression::GreaterThan(GreaterThanExpression {
			left: Box::new(self),
			right: Box::new(right),
		})
	}

	pub fn greater_than_equal(self, right: Expression) -> Self {
		Expression::GreaterThanEqual(GreaterThanEqualExpression {
			left: Box::new(self),
			right: Box::new(right),
		})
	}

	/// Attaches predictions to a relate expression. Other expressions are
	/// returned unchanged.
	pub fn with_predictions(self, predictions: impl IntoIterator<Item = Expression>) -> Self {
		match self {
			Expression::Relate(relate) => Expression::Relate(RelateExpression {
				vars: relate.vars,
				predictions: predictions.into_iter().collect(),
			}),
			other => other,
		}
	}

	fn is_leaf(&self) -> bool {
		matches!(self, Expression::Variable(_) | Expression::Literal(_))
	}
}

struct Operand<'a>(&'a Expression);

impl Display for Operand<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.0.is_leaf() || matches!(self.0, Expression::Mean(_) | Expression::Relate(_)) {
			Display::fmt(self.0, f)
		} else {
			write!(f, "({})", self.0)
		}
	}
}

fn comma_separated(expressions: &[Expression]) -> String {
	expressions.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ")
}

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Expression::Variable(VariableExpression(name)) => f.write_str(name),
			Expression::Literal(LiteralExpression(value)) => f.write_str(&value.to_literal()),
			Expression::Equal(e) => Display::fmt(e, f),
			Expression::NotEqual(e) => Display::fmt(e, f),
			Expression::LessThan(e) => Display::fmt(e, f),
			Expression::LessThanEqual(e) => Display::fmt(e, f),
			Expression::GreaterThan(e) => Display::fmt(e, f),
			Expression::GreaterThanEqual(e) => Display::fmt(e, f),
			Expression::Relate(e) => Display::fmt(e, f),
			Expression::Mean(e) => Display::fmt(e, f),
		}
	}
}

impl Display for RelateExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.predictions.is_empty() {
			write!(f, "relate({})", comma_separated(&self.vars))
		} else {
			write!(f, "relate({}; {})", comma_separated(&self.vars), comma_separated(&self.predictions))
		}
	}
}

impl Display for MeanExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "mean({})", self.var)
	}
}

macro_rules! display_comparison {
	($($expression:ident => $operator:expr),* $(,)?) => {
		$(
			impl Display for $expression {
				fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
					write!(f, "{} {} {}", Operand(&self.left), $operator.symbol(), Operand(&self.right))
				}
			}
		)*
	};
}

display_comparison! {
	EqualExpression => Operator::Equal,
	NotEqualExpression => Operator::NotEqual,
	LessThanExpression => Operator::LessThan,
	LessThanEqualExpression => Operator::LessThanEqual,
	GreaterThanExpression => Operator::GreaterThan,
	GreaterThanEqualExpression => Operator::GreaterThanEqual,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_comparison() {
		let expr = Expression::variable("lvl").less_than(Expression::literal("mid"));
		assert_eq!(expr.to_string(), "lvl < 'mid'");
	}

	#[test]
	fn test_display_nested_comparison() {
		let expr = Expression::variable("age")
			.greater_than(Expression::literal(10))
			.less_than_equal(Expression::literal(30));
		assert_eq!(expr.to_string(), "(age > 10) <= 30");
	}

	#[test]
	fn test_display_relate() {
		let expr = Expression::relate([Expression::variable("sex"), Expression::variable("score")])
			.with_predictions([Expression::literal("F").greater_than(Expression::literal("M"))]);
		assert_eq!(expr.to_string(), "relate(sex, score; 'F' > 'M')");
		assert_eq!(Expression::mean(Expression::variable("age")).to_string(), "mean(age)");
	}

	#[test]
	fn test_with_predictions_ignores_non_relate() {
		let expr = Expression::variable("a").with_predictions([Expression::literal(1)]);
		assert_eq!(expr, Expression::variable("a"));
	}

	#[test]
	fn test_deserialize() {
		let expr: Expression = serde_json::from_str(
			r#"{"less_than_equal": {"left": {"variable": "age"}, "right": {"literal": 20}}}"#,
		)
		.unwrap();
		assert_eq!(expr, Expression::variable("age").less_than_equal(Expression::literal(20)));

		let relate: Expression =
			serde_json::from_str(r#"{"relate": {"vars": [{"variable": "sex"}, {"variable": "score"}]}}"#).unwrap();
		assert_eq!(relate, Expression::relate([Expression::variable("sex"), Expression::variable("score")]));
	}
}
