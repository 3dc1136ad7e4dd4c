// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use indexmap::IndexMap;
use tea_type::{Result, Value, Variable};
use tracing::{debug, instrument};

use crate::{Column, DatasetAccessor, DatasetError};

/// Observations indexed by a participant identifier, plus the variables
/// registered for analysis.
///
/// Columns that are not registered as variables are kept and can be read
/// through [`Dataset::select`], but expressions can only refer to
/// registered variables.
#[derive(Debug, Clone)]
pub struct Dataset {
	participant_column: String,
	participants: Vec<Value>,
	variables: IndexMap<String, Variable>,
	columns: IndexMap<String, Vec<Value>>,
}

impl Dataset {
	pub fn builder(participant_column: impl Into<String>) -> DatasetBuilder {
		DatasetBuilder::new(participant_column)
	}

	/// Two INTERVAL variables `X` and `Y`, participants numbered from 0.
	pub fn from_arr_numeric(y: &[f64], x: &[f64]) -> Result<Dataset> {
		Dataset::builder("pid")
			.participants((0..x.len() as i64).map(Value::Int8))
			.variable(Variable::interval("X"))
			.variable(Variable::interval("Y"))
			.column("X", x.iter().copied().map(Value::float8))
			.column("Y", y.iter().copied().map(Value::float8))
			.build()
	}

	pub fn variables(&self) -> impl Iterator<Item = &Variable> {
		self.variables.values()
	}

	pub fn len(&self) -> usize {
		self.participants.len()
	}

	pub fn is_empty(&self) -> bool {
		self.participants.is_empty()
	}

	pub(crate) fn raw_column(&self, name: &str) -> Option<&[Value]> {
		self.columns.get(name).map(Vec::as_slice)
	}

	fn unregistered(&self, name: &str) -> DatasetError {
		DatasetError::UnregisteredVariable {
			name: name.to_string(),
			registered: self.variables.keys().cloned().collect(),
		}
	}
}

impl DatasetAccessor for Dataset {
	fn participant_column(&self) -> &str {
		&self.participant_column
	}

	fn participants(&self) -> &[Value] {
		&self.participants
	}

	fn variable(&self, name: &str) -> Result<&Variable> {
		self.variables.get(name).ok_or_else(|| self.unregistered(name).into())
	}

	#[instrument(name = "dataset::column", level = "trace", skip(self))]
	fn column(&self, name: &str) -> Result<Column> {
		let variable = self.variable(name)?;
		let values = self.raw_column(variable.name()).ok_or_else(|| DatasetError::MissingColumn {
			variable: name.to_string(),
		})?;
		Ok(Column::from_rows(
			name,
			self.participant_column.as_str(),
			self.participants.iter().cloned().zip(values.iter().cloned()),
		))
	}
}

pub struct DatasetBuilder {
	participant_column: String,
	participants: Vec<Value>,
	variables: Vec<Variable>,
	columns: IndexMap<String, Vec<Value>>,
}

impl DatasetBuilder {
	pub fn new(participant_column: impl Into<String>) -> Self {
		Self {
			participant_column: participant_column.into(),
			participants: Vec::new(),
			variables: Vec::new(),
			columns: IndexMap::new(),
		}
	}

	pub fn variable(mut self, variable: Variable) -> Self {
		self.variables.push(variable);
		self
	}

	pub fn variables(mut self, variables: impl IntoIterator<Item = Variable>) -> Self {
		self.variables.extend(variables);
		self
	}

	pub fn participants<I>(mut self, participants: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		self.participants = participants.into_iter().map(Into::into).collect();
		self
	}

	pub fn column<I>(mut self, name: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		self.columns.insert(name.into(), values.into_iter().map(Into::into).collect());
		self
	}

	/// Appends one participant. Columns the row does not mention are
	/// undefined for this participant, columns first seen here are undefined
	/// for the participants before it.
	pub fn row<I, S, V>(mut self, participant: impl Into<Value>, cells: I) -> Self
	where
		I: IntoIterator<Item = (S, V)>,
		S: Into<String>,
		V: Into<Value>,
	{
		let previous = self.participants.len();
		self.participants.push(participant.into());

		for (name, value) in cells {
			let column = self.columns.entry(name.into()).or_default();
			column.resize(previous, Value::Undefined);
			column.push(value.into());
		}

		let rows = self.participants.len();
		for column in self.columns.values_mut() {
			if column.len() < rows {
				column.resize(rows, Value::Undefined);
			}
		}
		self
	}

	#[instrument(name = "dataset::build", level = "debug", skip(self), fields(participant_column = %self.participant_column))]
	pub fn build(self) -> Result<Dataset> {
		let mut seen = HashSet::with_capacity(self.participants.len());
		for participant in &self.participants {
			if !seen.insert(participant) {
				return Err(DatasetError::DuplicateParticipant {
					participant: participant.clone(),
				}
				.into());
			}
		}

		for (name, values) in &self.columns {
			if values.len() != self.participants.len() {
				return Err(DatasetError::ColumnLengthMismatch {
					column: name.clone(),
					expected: self.participants.len(),
					actual: values.len(),
				}
				.into());
			}
		}

		for variable in &self.variables {
			let values = self.columns.get(variable.name()).ok_or_else(|| DatasetError::MissingColumn {
				variable: variable.name().to_string(),
			})?;
			validate(variable, values)?;
		}

		debug!(
			participants = self.participants.len(),
			variables = self.variables.len(),
			columns = self.columns.len(),
			"dataset built"
		);

		Ok(Dataset {
			participant_column: self.participant_column,
			participants: self.participants,
			variables: self.variables.into_iter().map(|v| (v.name().to_string(), v)).collect(),
			columns: self.columns,
		})
	}
}

fn validate(variable: &Variable, values: &[Value]) -> Result<()> {
	for value in values.iter().filter(|v| !v.is_undefined()) {
		if variable.statistical_type().is_numeric() {
			let Some(number) = value.as_f64() else {
				return Err(DatasetError::NonNumericValue {
					variable: variable.name().to_string(),
					value: value.clone(),
				}
				.into());
			};
			if let Some(range) = variable.range() {
				if !range.contains(number) {
					return Err(DatasetError::OutOfRange {
						variable: variable.name().to_string(),
						value: number,
						range,
					}
					.into());
				}
			}
		} else if let Some(categories) = variable.categories() {
			if !categories.contains(value) {
				return Err(DatasetError::UndeclaredCategory {
					variable: variable.name().to_string(),
					value: value.clone(),
				}
				.into());
			}
		}
	}
	Ok(())
}
