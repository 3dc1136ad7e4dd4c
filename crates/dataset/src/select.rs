// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use tea_type::{Operator, Result, Value};
use tracing::instrument;

use crate::{Column, Dataset, DatasetAccessor, DatasetError};

/// A `column <op> value` condition on raw column data.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
	pub column: String,
	pub operator: Operator,
	pub value: Value,
}

impl Predicate {
	pub fn new(column: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
		Self {
			column: column.into(),
			operator,
			value: value.into(),
		}
	}

	pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::new(column, Operator::Equal, value)
	}

	pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::new(column, Operator::NotEqual, value)
	}

	pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::new(column, Operator::LessThan, value)
	}

	pub fn le(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::new(column, Operator::LessThanEqual, value)
	}

	pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::new(column, Operator::GreaterThan, value)
	}

	pub fn ge(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::new(column, Operator::GreaterThanEqual, value)
	}

	fn matches(&self, value: &Value) -> bool {
		value.compare(&self.value).is_some_and(|ordering| self.operator.accepts(ordering))
	}
}

impl Display for Predicate {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {} {}", self.column, self.operator, self.value.to_literal())
	}
}

impl Dataset {
	/// SQL style select: the values of `column` for the participants that
	/// satisfy every predicate in `filter`.
	///
	/// Works on raw column data, registered as a variable or not. Values
	/// compare by their native order; statistical types play no role here.
	#[instrument(name = "dataset::select", level = "trace", skip(self, filter))]
	pub fn select(&self, column: &str, filter: &[Predicate]) -> Result<Column> {
		let selected = self.raw(column)?;
		let conditions = filter
			.iter()
			.map(|predicate| self.raw(&predicate.column).map(|values| (predicate, values)))
			.collect::<Result<Vec<_>>>()?;

		let rows = self.participants().iter().enumerate().filter_map(|(row, participant)| {
			conditions
				.iter()
				.all(|(predicate, values)| predicate.matches(&values[row]))
				.then(|| (participant.clone(), selected[row].clone()))
		});

		Ok(Column::from_rows(column, self.participant_column(), rows))
	}

	fn raw(&self, column: &str) -> Result<&[Value]> {
		self.raw_column(column).ok_or_else(|| {
			DatasetError::UnknownColumn {
				column: column.to_string(),
			}
			.into()
		})
	}
}
