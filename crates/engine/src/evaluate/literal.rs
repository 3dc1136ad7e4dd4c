// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_dataset::Column;
use tea_expression::LiteralExpression;

use crate::evaluate::{EvaluationContext, Metadata, StandardEvaluator, VarData};

impl StandardEvaluator {
	/// The literal repeated for every participant of the dataset.
	pub(crate) fn literal(&self, ctx: &EvaluationContext, literal: &LiteralExpression) -> VarData {
		let LiteralExpression(value) = literal;
		let column = Column::constant("", ctx.dataset.participant_column(), ctx.dataset.participants(), value);
		VarData::new(column, Metadata::literal(value.clone()))
	}
}
