// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_expression::VariableExpression;
use tea_type::Result;
use tracing::instrument;

use crate::evaluate::{EvaluationContext, Metadata, StandardEvaluator, VarData};

impl StandardEvaluator {
	#[instrument(name = "engine::evaluate::variable", level = "trace", skip_all, fields(name = %var.name()))]
	pub(crate) fn variable(&self, ctx: &EvaluationContext, var: &VariableExpression) -> Result<VarData> {
		let variable = ctx.dataset.variable(var.name())?;
		let column = ctx.dataset.column(var.name())?;
		Ok(VarData::new(column, Metadata::of(variable)))
	}
}
