// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	error::Error,
	fmt::Write as _,
	io::{Error as IoError, ErrorKind},
	path::Path,
};

use crate::testscript::{Command, parser::parse};

/// Runs testscript commands, returning their output.
pub trait Runner {
	/// Runs a command. Commands prefixed with `!` are expected to fail, the
	/// error becomes their output.
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>>;

	/// Called before the first block.
	fn start_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}

	/// Called after the last block, e.g. for state assertions.
	fn end_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}
}

/// Runs the testscript at `path`.
///
/// Panics if the generated output differs from the file. With
/// `UPDATE_TESTFILES=1` the file is rewritten instead.
pub fn run_path<R: Runner, P: AsRef<Path>>(runner: &mut R, path: P) -> std::io::Result<()> {
	let path = path.as_ref();
	if path.extension().is_some_and(|ext| ext == "skip") {
		return Ok(());
	}

	let input = std::fs::read_to_string(path)?;
	let output = generate(runner, &input)?;
	if output == input {
		return Ok(());
	}

	if std::env::var("UPDATE_TESTFILES").is_ok_and(|v| v == "1") {
		return std::fs::write(path, output);
	}
	panic!("{}", mismatch(&path.display().to_string(), &input, &output));
}

/// Runs an inline script, panicking on any difference.
pub fn run<R: Runner>(mut runner: R, script: &str) {
	let output = match generate(&mut runner, script) {
		Ok(output) => output,
		Err(err) => panic!("{err}"),
	};
	if output != script {
		panic!("{}", mismatch("inline script", script, &output));
	}
}

/// Generates the output for a script without comparing it.
pub fn generate<R: Runner>(runner: &mut R, input: &str) -> std::io::Result<String> {
	let eol = if input.contains("\r\n") {
		"\r\n"
	} else {
		"\n"
	};

	let blocks = parse(input).map_err(|err| IoError::new(ErrorKind::InvalidInput, err))?;

	runner.start_script().map_err(|err| IoError::other(format!("start_script failed: {err}")))?;

	let mut output = String::with_capacity(input.len());
	for block in &blocks {
		output.push_str(&block.literal);
		if block.commands.is_empty() {
			continue;
		}

		let mut block_output = String::new();
		for command in &block.commands {
			let command_output = match runner.run(command) {
				Ok(out) if command.fail => {
					return Err(IoError::other(format!(
						"expected command '{}' to fail at line {}, succeeded with: {out}",
						command.name, command.line_number
					)));
				}
				Ok(out) => out,
				Err(err) if command.fail => err.to_string(),
				Err(err) => {
					return Err(IoError::other(format!(
						"command '{}' failed at line {}: {err}",
						command.name, command.line_number
					)));
				}
			};
			block_output.push_str(&ensure_eol(command_output, eol));
		}

		for command in &block.commands {
			output.push_str(&command.line);
			output.push_str(eol);
		}
		output.push_str("---");
		output.push_str(eol);
		output.push_str(&block_output);
	}

	runner.end_script().map_err(|err| IoError::other(format!("end_script failed: {err}")))?;

	Ok(output)
}

fn ensure_eol(mut s: String, eol: &str) -> String {
	if !s.is_empty() && !s.ends_with('\n') {
		s.push_str(eol);
	}
	s
}

fn mismatch(name: &str, expected: &str, actual: &str) -> String {
	let mut message = format!("output of {name} differs from the script (UPDATE_TESTFILES=1 to accept):\n");
	let expected = expected.lines().collect::<Vec<_>>();
	let actual = actual.lines().collect::<Vec<_>>();
	for i in 0..expected.len().max(actual.len()) {
		let (want, got) = (expected.get(i), actual.get(i));
		if want != got {
			let _ = writeln!(message, "line {}:", i + 1);
			let _ = writeln!(message, "- {}", want.copied().unwrap_or("<missing>"));
			let _ = writeln!(message, "+ {}", got.copied().unwrap_or("<missing>"));
		}
	}
	message
}
