// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_engine::{Design, Distribution, ResData, Role, StudyType, evaluate};
use tea_expression::Expression;
use tea_testing::fixture;

fn relate(vars: impl IntoIterator<Item = Expression>, design: &Design) -> ResData {
	let dataset = fixture::participants();
	evaluate(&dataset, &Expression::relate(vars), Some(design)).unwrap().into_result().unwrap()
}

#[test]
fn test_sample_size_counts_shared_participants() {
	let design = Design::builder().independent("sex").dependent("score").build().unwrap();

	let all = relate([Expression::variable("sex"), Expression::variable("score")], &design);
	assert_eq!(all.sample_size, 3);

	let women = relate(
		[Expression::variable("sex").equal(Expression::literal("F")), Expression::variable("score")],
		&design,
	);
	assert_eq!(women.sample_size, 2);
	assert_eq!(women.combined.properties.participants, fixture::ids(["p1", "p3"]));
}

#[test]
fn test_statistics_describe_shared_participants() {
	let design = Design::builder().independent("sex").dependent("score").build().unwrap();
	let women = relate(
		[Expression::variable("sex").equal(Expression::literal("F")), Expression::variable("score")],
		&design,
	);

	let score = &women.combined.vars[1];
	assert_eq!(score.data.participants().cloned().collect::<Vec<_>>(), fixture::ids(["p1", "p3"]));
	assert_eq!(score.properties.sample_size, 2);
	assert_eq!(score.properties.numeric().unwrap().mean, Some(4.5));
	assert_eq!(women.get("score.mean"), Some(4.5));
	assert_eq!(women.get("score.sd"), Some(2.0f64.sqrt()));
}

#[test]
fn test_filtered_variables_keep_their_role() {
	let design = Design::from_json(
		r#"{"study type": "observational study", "independent variables": "age", "dependent variables": "lvl"}"#,
	)
	.unwrap();
	let result = relate(
		[Expression::variable("age").greater_than(Expression::literal(15)), Expression::variable("lvl")],
		&design,
	);

	let roles = result.combined.vars.iter().map(|var| (var.name(), var.role)).collect::<Vec<_>>();
	assert_eq!(roles, vec![("age", Role::Independent), ("lvl", Role::Dependent)]);
	assert_eq!(result.combined.vars[0].data.query(), "age > 15");
	assert_eq!(result.combined.properties.study_type, StudyType::ObservationalStudy);
	assert_eq!(result.sample_size, 3);
}

#[test]
fn test_properties_follow_statistical_type() {
	let design = Design::builder().independent("lvl").dependent("age").build().unwrap();
	let result = relate([Expression::variable("lvl"), Expression::variable("age")], &design);

	assert!(matches!(result.combined.vars[0].properties.distribution, Distribution::Categorical(_)));

	let age = result.combined.vars[1].properties.numeric().unwrap();
	assert_eq!(age.mean, Some(25.0));
	assert_eq!(age.min, Some(10.0));
	assert_eq!(age.max, Some(40.0));
	assert_eq!(age.skewness, Some(0.0));
	assert_eq!(result.get("age.mean"), Some(25.0));
	assert_eq!(result.get("age[mid].mean"), Some(30.0));
}

#[test]
fn test_unassigned_variables() {
	let design = Design::builder().independent("sex").build().unwrap();
	let result = relate([Expression::variable("sex"), Expression::variable("age")], &design);

	assert_eq!(result.combined.vars[1].role, Role::Unassigned);
	assert!(result.combined.properties.groups.is_empty());
}

#[test]
fn test_design_conflict_fails() {
	let dataset = fixture::participants();
	let design = Design {
		independent: vec!["sex".to_string()],
		dependent: vec!["sex".to_string()],
		..Design::default()
	};
	let expr = Expression::relate([Expression::variable("sex")]);

	let err = evaluate(&dataset, &expr, Some(&design)).unwrap_err();
	assert_eq!(err.code(), "DESIGN_001");
}
