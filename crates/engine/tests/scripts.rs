// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{error::Error, fmt::Write, path::Path};

use tea_dataset::{Dataset, DatasetBuilder};
use tea_engine::{Design, Evaluation, evaluate};
use tea_testing::{
	expression,
	testscript::{self, Command},
};
use tea_type::{Value, Variable};
use test_each_file::test_each_path;

/// Builds a dataset from `dataset`, `variable` and `row` commands, then
/// evaluates expressions against it.
#[derive(Default)]
struct Runner {
	builder: Option<DatasetBuilder>,
	dataset: Option<Dataset>,
	design: Option<Design>,
}

impl Runner {
	fn dataset(&mut self) -> Result<&Dataset, Box<dyn Error>> {
		if let Some(builder) = self.builder.take() {
			self.dataset = Some(builder.build().map_err(plain)?);
		}
		self.dataset.as_ref().ok_or_else(|| "no dataset, start one with 'dataset <participant column>'".into())
	}

	fn with_builder(&mut self, f: impl FnOnce(DatasetBuilder) -> DatasetBuilder) -> Result<(), Box<dyn Error>> {
		let builder = self.builder.take().ok_or("no dataset under construction")?;
		self.builder = Some(f(builder));
		Ok(())
	}
}

fn plain(err: tea_type::Error) -> Box<dyn Error> {
	format!("{}: {}", err.code(), err.message).into()
}

fn parse_value(text: &str) -> Value {
	if text == "undefined" {
		return Value::Undefined;
	}
	if let Ok(number) = text.parse::<i64>() {
		return Value::int8(number);
	}
	if let Ok(number) = text.parse::<f64>() {
		return Value::float8(number);
	}
	Value::utf8(text)
}

fn parse_variable(command: &Command) -> Result<Variable, Box<dyn Error>> {
	let mut args = command.positional();
	let name = args.next().ok_or("variable needs a name")?;
	let variable = match args.next().ok_or("variable needs a type")? {
		"nominal" => Variable::nominal(name, args),
		"ordinal" => Variable::ordinal(name, args),
		"interval" => Variable::interval(name),
		"ratio" => Variable::ratio(name),
		other => return Err(format!("unknown statistical type {other}").into()),
	};
	Ok(match (command.keyed("min"), command.keyed("max")) {
		(Some(min), Some(max)) => variable.with_range(min.parse()?, max.parse()?),
		_ => variable,
	})
}

impl testscript::Runner for Runner {
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		let mut output = String::new();
		match command.name.as_str() {
			"dataset" => {
				let participant_column = command.positional().next().unwrap_or("pid");
				self.builder = Some(Dataset::builder(participant_column));
				self.dataset = None;
				self.design = None;
			}

			"variable" => {
				let variable = parse_variable(command)?;
				self.with_builder(|builder| builder.variable(variable))?;
			}

			"row" => {
				let participant = command.positional().next().ok_or("row needs a participant")?;
				let cells = command.keyed_args().map(|(name, value)| (name.to_string(), parse_value(value))).collect::<Vec<_>>();
				let participant = parse_value(participant);
				self.with_builder(|builder| builder.row(participant, cells))?;
			}

			"design" => {
				self.design = Some(Design::from_json(&command.raw).map_err(plain)?);
			}

			"evaluate" => {
				let expr = expression::parse(&command.raw)?;
				let design = self.design.clone();
				let dataset = self.dataset()?;
				match evaluate(dataset, &expr, design.as_ref()).map_err(plain)? {
					Evaluation::Var(data) => {
						match (data.name(), data.query()) {
							("", _) => writeln!(output, "literal")?,
							(name, "") => writeln!(output, "{name}")?,
							(name, query) => writeln!(output, "{name} where {query}")?,
						}
						for (participant, value) in data.column.iter() {
							writeln!(output, "{}: {}", participant, value)?;
						}
					}
					Evaluation::Result(result) => {
						writeln!(output, "{}: n={}", result.test, result.sample_size)?;
						for (name, value) in &result.results {
							writeln!(output, "{} = {:.4}", name, value)?;
						}
					}
				}
			}

			name => return Err(format!("invalid command {name}").into()),
		}
		Ok(output)
	}
}

test_each_path! { in "crates/engine/tests/scripts" as scripts => test_script }

fn test_script(path: &Path) {
	testscript::run_path(&mut Runner::default(), path).expect("test failed")
}
