// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use indexmap::IndexMap;
use tea_dataset::DatasetAccessor;
use tea_expression::Expression;
use tea_type::{Result, Value};
use tracing::{debug, instrument};

use crate::{
	Design, StudyType,
	analysis::{DataProperties, Role, statistics},
	evaluate::VarData,
};

/// An evaluated variable with its role and properties.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleData {
	pub data: VarData,
	pub role: Role,
	pub properties: DataProperties,
}

impl RoleData {
	pub fn name(&self) -> &str {
		self.data.name()
	}
}

/// Everything a test needs: the related variables, their roles and
/// properties, the design and the predictions to check.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedData {
	pub vars: Vec<RoleData>,
	pub predictions: Vec<Expression>,
	pub design: Design,
	pub properties: CombinedProperties,
}

impl CombinedData {
	pub fn new(vars: Vec<RoleData>) -> Self {
		Self {
			vars,
			predictions: vec![],
			design: Design::default(),
			properties: CombinedProperties::default(),
		}
	}

	pub fn with_predictions(mut self, predictions: impl IntoIterator<Item = Expression>) -> Self {
		self.predictions = predictions.into_iter().collect();
		self
	}

	pub fn with_role(&self, role: Role) -> impl Iterator<Item = &RoleData> {
		self.vars.iter().filter(move |var| var.role == role)
	}

	pub fn independent(&self) -> impl Iterator<Item = &RoleData> {
		self.with_role(Role::Independent)
	}

	pub fn dependent(&self) -> impl Iterator<Item = &RoleData> {
		self.with_role(Role::Dependent)
	}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CombinedProperties {
	/// Participants with a defined value in every related variable.
	pub participants: Vec<Value>,
	pub sample_size: usize,
	/// Per dependent variable, properties of each group of the single
	/// categorical independent variable.
	pub groups: IndexMap<String, IndexMap<String, GroupProperties>>,
	pub study_type: StudyType,
	pub between_subjects: Vec<String>,
	pub within_subjects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupProperties {
	pub sample_size: usize,
	pub mean: Option<f64>,
	pub variance: Option<f64>,
}

/// Restricts every related variable to the participants they share and
/// recomputes its properties over those rows, then derives the combined
/// properties.
#[instrument(name = "engine::analysis::compute_combined_properties", level = "debug", skip_all)]
pub fn compute_combined_properties(
	dataset: &dyn DatasetAccessor,
	combined: CombinedData,
	design: &Design,
) -> Result<CombinedData> {
	let participants = dataset
		.participants()
		.iter()
		.filter(|participant| {
			combined.vars.iter().all(|var| var.data.column.get(participant).is_some_and(|v| !v.is_undefined()))
		})
		.cloned()
		.collect::<Vec<_>>();

	let shared = participants.iter().collect::<HashSet<_>>();
	let vars = combined
		.vars
		.into_iter()
		.map(|var| restrict(dataset, var, &shared))
		.collect::<Result<Vec<_>>>()?;

	let mut combined = CombinedData {
		vars,
		predictions: combined.predictions,
		design: design.clone(),
		properties: CombinedProperties::default(),
	};
	let groups = groups(dataset, &combined, &participants)?;

	debug!(sample_size = participants.len(), groups = groups.len(), "combined properties computed");

	combined.properties = CombinedProperties {
		sample_size: participants.len(),
		participants,
		groups,
		study_type: design.study_type,
		between_subjects: design.between_subjects.clone(),
		within_subjects: design.within_subjects.clone(),
	};
	Ok(combined)
}

fn restrict(dataset: &dyn DatasetAccessor, var: RoleData, shared: &HashSet<&Value>) -> Result<RoleData> {
	let column = var.data.column.filter(|participant, _| Ok(shared.contains(participant)))?;
	let properties = DataProperties::of(dataset.variable(var.name())?, &column);
	Ok(RoleData {
		data: VarData::new(column, var.data.metadata),
		role: var.role,
		properties,
	})
}

fn groups(
	dataset: &dyn DatasetAccessor,
	combined: &CombinedData,
	participants: &[Value],
) -> Result<IndexMap<String, IndexMap<String, GroupProperties>>> {
	let mut independent = combined.independent();
	let (Some(iv), None) = (independent.next(), independent.next()) else {
		return Ok(IndexMap::new());
	};
	let variable = dataset.variable(iv.name())?;
	let Some(categories) = variable.categories().filter(|_| variable.statistical_type().is_categorical()) else {
		return Ok(IndexMap::new());
	};

	let mut result = IndexMap::new();
	for dv in combined.dependent().filter(|dv| dv.properties.numeric().is_some()) {
		let mut per_group = IndexMap::with_capacity(categories.len());
		for (rank, label) in categories.labels().enumerate() {
			let values = participants
				.iter()
				.filter(|p| iv.data.column.get(p).and_then(|v| categories.rank_of(v)) == Some(rank as i64))
				.filter_map(|p| dv.data.column.get(p).and_then(Value::as_f64))
				.collect::<Vec<_>>();

			per_group.insert(
				label.to_string(),
				GroupProperties {
					sample_size: values.len(),
					mean: statistics::mean(&values),
					variance: statistics::variance(&values),
				},
			);
		}
		result.insert(dv.name().to_string(), per_group);
	}
	Ok(result)
}

#[cfg(test)]
mod tests {
	use tea_expression::Expression;
	use tea_testing::fixture;

	use super::*;
	use crate::{assign_roles, compute_data_properties, evaluate};

	fn combined(exprs: &[Expression], design: &Design) -> CombinedData {
		let dataset = fixture::participants();
		let vars = exprs
			.iter()
			.map(|expr| evaluate(&dataset, expr, None).unwrap().into_var_data().unwrap())
			.collect::<Vec<_>>();
		let roles = assign_roles(vars, design).unwrap();
		let combined = compute_data_properties(&dataset, roles).unwrap();
		compute_combined_properties(&dataset, combined, design).unwrap()
	}

	#[test]
	fn test_shared_participants() {
		let design = Design::builder().independent("sex").dependent("score").build().unwrap();
		let combined = combined(
			&[Expression::variable("sex"), Expression::variable("score").greater_than(Expression::literal(3.5))],
			&design,
		);

		assert_eq!(combined.properties.participants, fixture::ids(["p2", "p3"]));
		assert_eq!(combined.properties.sample_size, 2);
		assert_eq!(combined.design, design);
	}

	#[test]
	fn test_properties_are_restricted_to_shared_participants() {
		let design = Design::builder().independent("lvl").dependent("score").build().unwrap();
		let combined = combined(&[Expression::variable("lvl"), Expression::variable("score")], &design);

		// p4 has no score, so its level is left out too
		let lvl = combined.vars[0].properties.categorical().unwrap();
		assert_eq!(lvl.counts["mid"], 1);
		assert_eq!(combined.vars[0].properties.sample_size, 3);
		assert_eq!(combined.vars[0].data.len(), 3);
	}

	#[test]
	fn test_groups_per_category() {
		let design = Design::builder().independent("sex").dependent("score").between_subjects("sex").build().unwrap();
		let combined = combined(&[Expression::variable("sex"), Expression::variable("score")], &design);

		let score = &combined.properties.groups["score"];
		assert_eq!(score.keys().collect::<Vec<_>>(), vec!["F", "M"]);
		assert_eq!(score["F"].sample_size, 2);
		assert_eq!(score["F"].mean, Some(4.5));
		assert_eq!(score["F"].variance, Some(2.0));
		assert_eq!(score["M"].sample_size, 1);
		assert_eq!(score["M"].variance, None);
		assert_eq!(combined.properties.between_subjects, vec!["sex"]);
	}

	#[test]
	fn test_no_groups_for_numeric_independent() {
		let design = Design::builder().independent("age").dependent("score").build().unwrap();
		let combined = combined(&[Expression::variable("age"), Expression::variable("score")], &design);

		assert!(combined.properties.groups.is_empty());
	}
}
