// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use tea_dataset::Column;
use tea_type::{Categories, Result, StatisticalType, Value};
use tracing::debug;

use super::Comparison;
use crate::{EvalError, evaluate::VarData};

/// Compares category ranks. The bound is a category label or a rank.
pub(super) fn compare<C: Comparison>(node: &dyn Display, lhs: &VarData, bound: &Value) -> Result<Column> {
	let categories = lhs.metadata.categories.as_ref().ok_or_else(|| EvalError::MalformedRelation {
		expression: node.to_string(),
		reason: format!("ORDINAL variable '{}' declares no categories", lhs.name()),
	})?;

	let limit = bound_rank(node, lhs, categories, bound)?;

	lhs.column.filter(|participant, value| {
		if value.is_undefined() {
			debug!(variable = lhs.name(), %participant, "dropping undefined row");
			return Ok(false);
		}
		let rank = categories.rank_of(value).ok_or_else(|| unknown(node, lhs, value))?;
		Ok(C::OPERATOR.accepts(rank.cmp(&limit)))
	})
}

fn bound_rank(node: &dyn Display, lhs: &VarData, categories: &Categories, bound: &Value) -> Result<i64> {
	match bound {
		Value::Utf8(label) => categories.rank(label).ok_or_else(|| unknown(node, lhs, bound)),
		Value::Int8(rank) => Ok(*rank),
		other => Err(EvalError::UnsupportedBound {
			variable: lhs.name().to_string(),
			statistical_type: StatisticalType::Ordinal,
			bound: other.clone(),
			kind: other.kind(),
			expression: node.to_string(),
		}
		.into()),
	}
}

fn unknown(node: &dyn Display, lhs: &VarData, value: &Value) -> tea_type::Error {
	EvalError::UnknownCategory {
		variable: lhs.name().to_string(),
		value: value.clone(),
		expression: node.to_string(),
	}
	.into()
}
