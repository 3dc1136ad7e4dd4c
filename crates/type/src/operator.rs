// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
	Equal,
	NotEqual,
	LessThan,
	LessThanEqual,
	GreaterThan,
	GreaterThanEqual,
}

impl Operator {
	pub fn symbol(&self) -> &'static str {
		match self {
			Operator::Equal => "==",
			Operator::NotEqual => "!=",
			Operator::LessThan => "<",
			Operator::LessThanEqual => "<=",
			Operator::GreaterThan => ">",
			Operator::GreaterThanEqual => ">=",
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			Operator::Equal => "Equal",
			Operator::NotEqual => "Not Equal",
			Operator::LessThan => "Less Than",
			Operator::LessThanEqual => "Less Than Equal",
			Operator::GreaterThan => "Greater Than",
			Operator::GreaterThanEqual => "Greater Than Equal",
		}
	}

	/// Whether `left <op> right` holds given `left.cmp(right)`.
	pub fn accepts(&self, ordering: Ordering) -> bool {
		match self {
			Operator::Equal => ordering == Ordering::Equal,
			Operator::NotEqual => ordering != Ordering::Equal,
			Operator::LessThan => ordering == Ordering::Less,
			Operator::LessThanEqual => ordering != Ordering::Greater,
			Operator::GreaterThan => ordering == Ordering::Greater,
			Operator::GreaterThanEqual => ordering != Ordering::Less,
		}
	}
}

impl Display for Operator {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.symbol())
	}
}
