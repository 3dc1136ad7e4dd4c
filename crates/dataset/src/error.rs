// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_type::{Diagnostic, Error, IntoDiagnostic, Range, Value};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
	#[error("variable '{name}' is not registered in the dataset")]
	UnregisteredVariable {
		name: String,
		registered: Vec<String>,
	},

	#[error("participant '{participant}' appears more than once")]
	DuplicateParticipant {
		participant: Value,
	},

	#[error("registered variable '{variable}' has no column")]
	MissingColumn {
		variable: String,
	},

	#[error("column '{column}' has {actual} values, expected {expected}")]
	ColumnLengthMismatch {
		column: String,
		expected: usize,
		actual: usize,
	},

	#[error("value {value} of '{variable}' lies outside {range}")]
	OutOfRange {
		variable: String,
		value: f64,
		range: Range,
	},

	#[error("'{value}' is not a declared category of '{variable}'")]
	UndeclaredCategory {
		variable: String,
		value: Value,
	},

	#[error("column '{column}' does not exist")]
	UnknownColumn {
		column: String,
	},

	#[error("'{value}' of '{variable}' is not a number")]
	NonNumericValue {
		variable: String,
		value: Value,
	},
}

impl IntoDiagnostic for DatasetError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			DatasetError::UnregisteredVariable {
				name,
				registered,
			} => Diagnostic {
				code: "DATASET_001".to_string(),
				message,
				fragment: Some(name),
				label: Some("unknown variable".to_string()),
				help: Some("register the variable with the dataset before referring to it".to_string()),
				notes: vec![if registered.is_empty() {
					"the dataset has no registered variables".to_string()
				} else {
					format!("registered variables: {}", registered.join(", "))
				}],
			},

			DatasetError::DuplicateParticipant {
				..
			} => Diagnostic {
				code: "DATASET_002".to_string(),
				message,
				help: Some("participant identifiers must be unique across rows".to_string()),
				..Default::default()
			},

			DatasetError::MissingColumn {
				variable,
			} => Diagnostic {
				code: "DATASET_003".to_string(),
				message,
				fragment: Some(variable),
				label: Some("no data for this variable".to_string()),
				help: Some("add a column with the variable's name".to_string()),
				..Default::default()
			},

			DatasetError::ColumnLengthMismatch {
				..
			} => Diagnostic {
				code: "DATASET_004".to_string(),
				message,
				help: Some("every column needs exactly one value per participant".to_string()),
				..Default::default()
			},

			DatasetError::OutOfRange {
				variable,
				..
			} => Diagnostic {
				code: "DATASET_005".to_string(),
				message,
				fragment: Some(variable),
				label: Some("outside the declared range".to_string()),
				help: Some("fix the observation or widen the declared range".to_string()),
				..Default::default()
			},

			DatasetError::UndeclaredCategory {
				variable,
				..
			} => Diagnostic {
				code: "DATASET_006".to_string(),
				message,
				fragment: Some(variable),
				label: Some("not a declared category".to_string()),
				help: Some("declare every category a categorical variable can take".to_string()),
				..Default::default()
			},

			DatasetError::UnknownColumn {
				column,
			} => Diagnostic {
				code: "DATASET_007".to_string(),
				message,
				fragment: Some(column),
				label: Some("unknown column".to_string()),
				..Default::default()
			},

			DatasetError::NonNumericValue {
				variable,
				..
			} => Diagnostic {
				code: "DATASET_008".to_string(),
				message,
				fragment: Some(variable),
				label: Some("INTERVAL and RATIO variables hold numbers".to_string()),
				..Default::default()
			},
		}
	}
}

impl From<DatasetError> for Error {
	fn from(err: DatasetError) -> Self {
		Error(err.into_diagnostic())
	}
}
