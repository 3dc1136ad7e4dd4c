// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// A group of commands followed by `---` and their expected output.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
	/// Comments and blank lines in front of the first command, reproduced
	/// as is.
	pub literal: String,
	pub commands: Vec<Command>,
	pub line_number: u32,
}

/// A single script line: `[!]name arg key=value ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
	pub name: String,
	pub args: Vec<Argument>,
	/// Everything after the name, untokenized.
	pub raw: String,
	/// The line as written, without its end of line.
	pub line: String,
	/// Prefixed with `!`, the command is expected to fail.
	pub fail: bool,
	pub line_number: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
	pub key: Option<String>,
	pub value: String,
}

impl Command {
	pub fn positional(&self) -> impl Iterator<Item = &str> {
		self.args.iter().filter(|a| a.key.is_none()).map(|a| a.value.as_str())
	}

	pub fn keyed(&self, key: &str) -> Option<&str> {
		self.args.iter().find(|a| a.key.as_deref() == Some(key)).map(|a| a.value.as_str())
	}

	pub fn keyed_args(&self) -> impl Iterator<Item = (&str, &str)> {
		self.args.iter().filter_map(|a| a.key.as_deref().map(|key| (key, a.value.as_str())))
	}
}
