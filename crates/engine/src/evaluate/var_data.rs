// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_dataset::Column;
use tea_type::{Categories, Range, StatisticalType, Value, Variable};

/// Describes where a [`VarData`] came from and which filters produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
	/// Source variable, empty for literals.
	pub var_name: String,
	pub statistical_type: Option<StatisticalType>,
	pub categories: Option<Categories>,
	pub range: Option<Range>,
	/// Filters applied so far, `age > 10 & age <= 30`.
	pub query: String,
	/// The literal value, for literals only.
	pub value: Option<Value>,
}

impl Metadata {
	pub fn of(variable: &Variable) -> Self {
		Self {
			var_name: variable.name().to_string(),
			statistical_type: Some(variable.statistical_type()),
			categories: variable.categories().cloned(),
			range: variable.range(),
			query: String::new(),
			value: None,
		}
	}

	pub fn literal(value: Value) -> Self {
		Self {
			var_name: String::new(),
			statistical_type: None,
			categories: None,
			range: None,
			query: String::new(),
			value: Some(value),
		}
	}

	/// A copy with `fragment` appended to the query.
	pub fn filtered(&self, fragment: &str) -> Self {
		let query = if self.query.is_empty() {
			fragment.to_string()
		} else {
			format!("{} & {}", self.query, fragment)
		};
		Self {
			query,
			..self.clone()
		}
	}

	pub fn is_literal(&self) -> bool {
		self.value.is_some()
	}
}

/// Participant-indexed values of one variable, restricted to the
/// participants that satisfied every filter applied so far.
#[derive(Debug, Clone, PartialEq)]
pub struct VarData {
	pub column: Column,
	pub metadata: Metadata,
}

impl VarData {
	pub fn new(column: Column, metadata: Metadata) -> Self {
		Self {
			column,
			metadata,
		}
	}

	pub fn name(&self) -> &str {
		&self.metadata.var_name
	}

	pub fn statistical_type(&self) -> Option<StatisticalType> {
		self.metadata.statistical_type
	}

	pub fn query(&self) -> &str {
		&self.metadata.query
	}

	pub fn len(&self) -> usize {
		self.column.len()
	}

	pub fn is_empty(&self) -> bool {
		self.column.is_empty()
	}

	pub fn participants(&self) -> impl Iterator<Item = &Value> {
		self.column.participants()
	}
}
