// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_dataset::Dataset;
use tea_type::{Value, Variable};

/// Four participants `p1..p4` indexed by `pid`:
///
/// | pid | sex | age | lvl  | score     |
/// |-----|-----|-----|------|-----------|
/// | p1  | F   | 10  | low  | 3.5       |
/// | p2  | M   | 20  | mid  | 4.0       |
/// | p3  | F   | 30  | high | 5.5       |
/// | p4  | M   | 40  | mid  | undefined |
pub fn participants() -> Dataset {
	let rows = [
		("p1", "F", 10, "low", Value::float8(3.5)),
		("p2", "M", 20, "mid", Value::float8(4.0)),
		("p3", "F", 30, "high", Value::float8(5.5)),
		("p4", "M", 40, "mid", Value::Undefined),
	];

	rows.into_iter()
		.fold(
			Dataset::builder("pid")
				.variable(Variable::nominal("sex", ["F", "M"]))
				.variable(Variable::ratio("age").with_range(0.0, 120.0))
				.variable(Variable::ordinal("lvl", ["low", "mid", "high"]))
				.variable(Variable::interval("score")),
			|builder, (pid, sex, age, lvl, score)| {
				builder.row(
					pid,
					[
						("sex", Value::utf8(sex)),
						("age", Value::int8(age)),
						("lvl", Value::utf8(lvl)),
						("score", score),
					],
				)
			},
		)
		.build()
		.expect("participants fixture is valid")
}

/// Participant identifiers as values.
pub fn ids<const N: usize>(ids: [&str; N]) -> Vec<Value> {
	ids.into_iter().map(Value::utf8).collect()
}
