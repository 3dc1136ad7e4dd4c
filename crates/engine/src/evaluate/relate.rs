// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_expression::RelateExpression;
use tea_type::Result;
use tracing::{debug, instrument};

use crate::{
	EvalError, ResData,
	analysis::{assign_roles, compute_combined_properties, compute_data_properties},
	evaluate::{EvaluationContext, StandardEvaluator, VarData},
};

impl StandardEvaluator {
	#[instrument(name = "engine::evaluate::relate", level = "debug", skip_all, fields(vars = relate.vars.len()))]
	pub(crate) fn relate(&self, ctx: &EvaluationContext, relate: &RelateExpression) -> Result<ResData> {
		let design = ctx.design.ok_or_else(|| EvalError::MissingDesign {
			expression: relate.to_string(),
		})?;
		design.validate()?;

		let vars = relate
			.vars
			.iter()
			.map(|var| {
				let data = self.var_data(ctx, var)?;
				if data.name().is_empty() {
					return Err(EvalError::MalformedRelation {
						expression: relate.to_string(),
						reason: format!("'{}' does not refer to a variable", var),
					}
					.into());
				}
				Ok(data)
			})
			.collect::<Result<Vec<VarData>>>()?;

		let roles = assign_roles(vars, design)?;
		let combined = compute_data_properties(ctx.dataset, roles)?;
		let combined = compute_combined_properties(ctx.dataset, combined, design)?
			.with_predictions(relate.predictions.iter().cloned());

		debug!(
			executor = self.executor.name(),
			sample_size = combined.properties.sample_size,
			"executing test"
		);
		self.executor.execute(ctx.dataset, &combined)
	}
}
