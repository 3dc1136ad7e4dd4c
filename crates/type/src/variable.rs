// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Value;

/// Level of measurement of a variable. Determines which comparisons are
/// meaningful and how they are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatisticalType {
	/// Unordered categories
	Nominal,
	/// Ordered categories
	Ordinal,
	/// Numeric, no true zero
	Interval,
	/// Numeric, true zero
	Ratio,
}

impl StatisticalType {
	pub fn is_categorical(&self) -> bool {
		matches!(self, StatisticalType::Nominal | StatisticalType::Ordinal)
	}

	pub fn is_numeric(&self) -> bool {
		matches!(self, StatisticalType::Interval | StatisticalType::Ratio)
	}
}

impl Display for StatisticalType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			StatisticalType::Nominal => f.write_str("NOMINAL"),
			StatisticalType::Ordinal => f.write_str("ORDINAL"),
			StatisticalType::Interval => f.write_str("INTERVAL"),
			StatisticalType::Ratio => f.write_str("RATIO"),
		}
	}
}

/// Ordered mapping from category label to rank. Ranks follow declaration
/// order, starting at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Categories(IndexMap<String, i64>);

impl Categories {
	pub fn new<I, S>(labels: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut ranks = IndexMap::new();
		for label in labels {
			let next = ranks.len() as i64;
			ranks.entry(label.into()).or_insert(next);
		}
		Self(ranks)
	}

	pub fn rank(&self, label: &str) -> Option<i64> {
		self.0.get(label).copied()
	}

	/// Rank of an observation. Non-text observations are looked up by their
	/// textual rendering, so a Likert answer `3` finds the category `"3"`.
	pub fn rank_of(&self, value: &Value) -> Option<i64> {
		match value {
			Value::Undefined => None,
			Value::Utf8(label) => self.rank(label),
			other => self.rank(&other.to_string()),
		}
	}

	pub fn contains(&self, value: &Value) -> bool {
		self.rank_of(value).is_some()
	}

	pub fn labels(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<String>> for Categories {
	fn from(labels: Vec<String>) -> Self {
		Categories::new(labels)
	}
}

impl From<Categories> for Vec<String> {
	fn from(categories: Categories) -> Self {
		categories.0.into_keys().collect()
	}
}

/// Declared numeric range of a variable, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
	pub min: f64,
	pub max: f64,
}

impl Range {
	pub fn contains(&self, v: f64) -> bool {
		v >= self.min && v <= self.max
	}
}

impl Display for Range {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}]", self.min, self.max)
	}
}

/// A column of a dataset as the analysis sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
	name: String,
	#[serde(rename = "type")]
	statistical_type: StatisticalType,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	categories: Option<Categories>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	range: Option<Range>,
}

impl Variable {
	pub fn nominal<I, S>(name: impl Into<String>, categories: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			name: name.into(),
			statistical_type: StatisticalType::Nominal,
			categories: Some(Categories::new(categories)),
			range: None,
		}
	}

	pub fn ordinal<I, S>(name: impl Into<String>, categories: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			name: name.into(),
			statistical_type: StatisticalType::Ordinal,
			categories: Some(Categories::new(categories)),
			range: None,
		}
	}

	pub fn interval(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			statistical_type: StatisticalType::Interval,
			categories: None,
			range: None,
		}
	}

	pub fn ratio(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			statistical_type: StatisticalType::Ratio,
			categories: None,
			range: None,
		}
	}

	pub fn with_range(mut self, min: f64, max: f64) -> Self {
		self.range = Some(Range {
			min,
			max,
		});
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn statistical_type(&self) -> StatisticalType {
		self.statistical_type
	}

	pub fn categories(&self) -> Option<&Categories> {
		self.categories.as_ref()
	}

	pub fn range(&self) -> Option<Range> {
		self.range
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_categories_rank_by_declaration_order() {
		let categories = Categories::new(["low", "mid", "high"]);
		assert_eq!(categories.rank("low"), Some(0));
		assert_eq!(categories.rank("mid"), Some(1));
		assert_eq!(categories.rank("high"), Some(2));
		assert_eq!(categories.rank("extreme"), None);
	}

	#[test]
	fn test_categories_duplicate_label_keeps_first_rank() {
		let categories = Categories::new(["a", "b", "a"]);
		assert_eq!(categories.len(), 2);
		assert_eq!(categories.rank("a"), Some(0));
	}

	#[test]
	fn test_rank_of_numeric_label() {
		let categories = Categories::new(["1", "2", "3", "4", "5"]);
		assert_eq!(categories.rank_of(&Value::int8(3)), Some(2));
		assert_eq!(categories.rank_of(&Value::Undefined), None);
	}

	#[test]
	fn test_variable_deserialize() {
		let variable: Variable =
			serde_json::from_str(r#"{"name": "lvl", "type": "ordinal", "categories": ["low", "mid", "high"]}"#)
				.unwrap();
		assert_eq!(variable, Variable::ordinal("lvl", ["low", "mid", "high"]));
	}

	#[test]
	fn test_range_is_inclusive() {
		let variable = Variable::ratio("age").with_range(0.0, 120.0);
		let range = variable.range().unwrap();
		assert!(range.contains(0.0));
		assert!(range.contains(120.0));
		assert!(!range.contains(120.5));
	}
}
