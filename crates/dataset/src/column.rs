// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use tea_type::{Result, Value};

/// Values of one variable keyed by participant identifier, in dataset row
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
	name: String,
	index_name: String,
	rows: IndexMap<Value, Value>,
}

impl Column {
	pub fn new(name: impl Into<String>, index_name: impl Into<String>, rows: IndexMap<Value, Value>) -> Self {
		Self {
			name: name.into(),
			index_name: index_name.into(),
			rows,
		}
	}

	pub fn from_rows<I>(name: impl Into<String>, index_name: impl Into<String>, rows: I) -> Self
	where
		I: IntoIterator<Item = (Value, Value)>,
	{
		Self::new(name, index_name, rows.into_iter().collect())
	}

	/// The same value for every given participant.
	pub fn constant(
		name: impl Into<String>,
		index_name: impl Into<String>,
		participants: &[Value],
		value: &Value,
	) -> Self {
		Self::from_rows(name, index_name, participants.iter().map(|p| (p.clone(), value.clone())))
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Name of the participant identifier column the rows are keyed by.
	pub fn index_name(&self) -> &str {
		&self.index_name
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn get(&self, participant: &Value) -> Option<&Value> {
		self.rows.get(participant)
	}

	pub fn contains(&self, participant: &Value) -> bool {
		self.rows.contains_key(participant)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
		self.rows.iter()
	}

	pub fn participants(&self) -> impl Iterator<Item = &Value> {
		self.rows.keys()
	}

	pub fn values(&self) -> impl Iterator<Item = &Value> {
		self.rows.values()
	}

	/// Keeps the rows `keep` accepts. Errors raised by `keep` abort the
	/// filter.
	pub fn filter<F>(&self, mut keep: F) -> Result<Column>
	where
		F: FnMut(&Value, &Value) -> Result<bool>,
	{
		let mut rows = IndexMap::with_capacity(self.rows.len());
		for (participant, value) in &self.rows {
			if keep(participant, value)? {
				rows.insert(participant.clone(), value.clone());
			}
		}
		Ok(Column {
			name: self.name.clone(),
			index_name: self.index_name.clone(),
			rows,
		})
	}

	pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
		self.index_name = index_name.into();
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ages() -> Column {
		Column::from_rows(
			"age",
			"pid",
			[
				(Value::utf8("p1"), Value::int8(10)),
				(Value::utf8("p2"), Value::int8(20)),
				(Value::utf8("p3"), Value::int8(30)),
			],
		)
	}

	#[test]
	fn test_filter_keeps_order_and_index() {
		let column = ages();
		let filtered = column.filter(|_, v| Ok(v.as_i64().unwrap_or(0) > 10)).unwrap();

		assert_eq!(filtered.name(), "age");
		assert_eq!(filtered.index_name(), "pid");
		assert_eq!(filtered.participants().cloned().collect::<Vec<_>>(), vec![Value::utf8("p2"), Value::utf8("p3")]);
	}

	#[test]
	fn test_filter_propagates_error() {
		let column = ages();
		let result = column.filter(|_, _| Err(tea_type::Error(Default::default())));
		assert!(result.is_err());
	}

	#[test]
	fn test_constant() {
		let participants = [Value::utf8("p1"), Value::utf8("p2")];
		let column = Column::constant("", "pid", &participants, &Value::utf8("F"));

		assert_eq!(column.len(), 2);
		assert_eq!(column.get(&Value::utf8("p2")), Some(&Value::utf8("F")));
	}
}
