// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_type::{Diagnostic, Error, IntoDiagnostic, Operator, StatisticalType, Value};

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
	#[error("expected variable data from '{expression}', got {found}")]
	TypeMismatch {
		expression: String,
		found: &'static str,
	},

	#[error("cannot apply {operator} to {statistical_type} variable '{variable}'")]
	InvalidComparison {
		operator: Operator,
		variable: String,
		statistical_type: StatisticalType,
		expression: String,
	},

	#[error("malformed relation '{expression}': {reason}")]
	MalformedRelation {
		expression: String,
		reason: String,
	},

	#[error("cannot compare {statistical_type} variable '{variable}' to {kind} value {bound}")]
	UnsupportedBound {
		variable: String,
		statistical_type: StatisticalType,
		bound: Value,
		kind: &'static str,
		expression: String,
	},

	#[error("{node} is not implemented")]
	NotImplemented {
		node: &'static str,
		expression: String,
	},

	#[error("'{operand}' cannot be used as the right side of a comparison")]
	UnsupportedOperand {
		operand: String,
		expression: String,
	},

	#[error("'{value}' is not a category of '{variable}'")]
	UnknownCategory {
		variable: String,
		value: Value,
		expression: String,
	},

	#[error("'{operand}' has no values to compare against")]
	EmptyBound {
		operand: String,
		expression: String,
	},

	#[error("relate needs a study design")]
	MissingDesign {
		expression: String,
	},
}

impl IntoDiagnostic for EvalError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			EvalError::TypeMismatch {
				expression,
				..
			} => Diagnostic {
				code: "EVAL_001".to_string(),
				message,
				fragment: Some(expression),
				label: Some("does not evaluate to variable data".to_string()),
				help: Some(
					"comparisons and relate operate on variables, filtered variables and literals".to_string(),
				),
				notes: vec![],
			},

			EvalError::InvalidComparison {
				operator,
				statistical_type,
				expression,
				..
			} => Diagnostic {
				code: "EVAL_002".to_string(),
				message,
				fragment: Some(expression),
				label: Some(format!("{} has no order", statistical_type)),
				help: Some(format!(
					"{} categories can only be compared with == or !=",
					statistical_type
				)),
				notes: vec![format!("{} ({}) needs ordered values", operator.name(), operator.symbol())],
			},

			EvalError::MalformedRelation {
				expression,
				..
			} => Diagnostic {
				code: "EVAL_003".to_string(),
				message,
				fragment: Some(expression),
				label: Some("the filtered side must be a variable".to_string()),
				help: Some("put the variable on the left side and the bound on the right side".to_string()),
				notes: vec![],
			},

			EvalError::UnsupportedBound {
				statistical_type,
				expression,
				..
			} => Diagnostic {
				code: "EVAL_004".to_string(),
				message,
				fragment: Some(expression),
				label: Some("unsupported bound".to_string()),
				help: Some(match statistical_type {
					StatisticalType::Ordinal => {
						"ORDINAL variables compare to a category label or an integer rank".to_string()
					}
					_ => format!("{} variables compare to numbers", statistical_type),
				}),
				notes: vec![],
			},

			EvalError::NotImplemented {
				expression,
				..
			} => Diagnostic {
				code: "EVAL_005".to_string(),
				message,
				fragment: Some(expression),
				label: Some("no executable semantics yet".to_string()),
				help: None,
				notes: vec![],
			},

			EvalError::UnsupportedOperand {
				expression,
				..
			} => Diagnostic {
				code: "EVAL_006".to_string(),
				message,
				fragment: Some(expression),
				label: Some("unsupported right operand".to_string()),
				help: Some("compare against a literal or a variable".to_string()),
				notes: vec![],
			},

			EvalError::UnknownCategory {
				variable,
				expression,
				..
			} => Diagnostic {
				code: "EVAL_007".to_string(),
				message,
				fragment: Some(expression),
				label: Some("unknown category".to_string()),
				help: Some(format!("use one of the categories declared for '{}'", variable)),
				notes: vec![],
			},

			EvalError::EmptyBound {
				expression,
				..
			} => Diagnostic {
				code: "EVAL_008".to_string(),
				message,
				fragment: Some(expression),
				label: Some("no bound".to_string()),
				help: Some(
					"the right side of an ordering comparison supplies its first value as bound".to_string(),
				),
				notes: vec![],
			},

			EvalError::MissingDesign {
				expression,
			} => Diagnostic {
				code: "EVAL_009".to_string(),
				message,
				fragment: Some(expression),
				label: Some("no design given".to_string()),
				help: Some("pass the study design naming independent and dependent variables".to_string()),
				notes: vec![],
			},
		}
	}
}

impl From<EvalError> for Error {
	fn from(err: EvalError) -> Self {
		Error(err.into_diagnostic())
	}
}
