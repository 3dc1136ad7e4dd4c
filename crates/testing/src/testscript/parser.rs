// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::iter::Peekable;

use crate::testscript::command::{Argument, Block, Command};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("parse error at line {line}: {message}")]
pub struct ParseError {
	pub line: u32,
	pub message: String,
}

impl ParseError {
	fn new(line: u32, message: impl Into<String>) -> Self {
		Self {
			line,
			message: message.into(),
		}
	}
}

/// Splits a script into blocks. Expected output is skipped, it is
/// regenerated by running the commands.
pub(crate) fn parse(input: &str) -> Result<Vec<Block>, ParseError> {
	let mut lines = input.split_inclusive('\n').zip(1u32..).peekable();
	let mut blocks = Vec::new();

	loop {
		let mut literal = String::new();
		while let Some((line, _)) = lines.next_if(|(line, _)| is_literal(line)) {
			literal.push_str(line);
		}

		let mut commands = Vec::new();
		let mut terminated = false;
		for (line, number) in lines.by_ref() {
			let text = line.trim_end_matches(['\r', '\n']);
			if text.trim() == "---" {
				if commands.is_empty() {
					return Err(ParseError::new(number, "--- without commands"));
				}
				terminated = true;
				break;
			}
			if is_literal(text) {
				return Err(ParseError::new(number, "expected a command or ---"));
			}
			commands.push(parse_command(text, number)?);
		}

		let Some(first) = commands.first() else {
			if !literal.is_empty() {
				blocks.push(Block {
					literal,
					commands,
					line_number: 0,
				});
			}
			return Ok(blocks);
		};
		if !terminated {
			return Err(ParseError::new(first.line_number, "missing --- after commands"));
		}

		skip_output(&mut lines);
		blocks.push(Block {
			literal,
			line_number: first.line_number,
			commands,
		});
	}
}

fn is_literal(line: &str) -> bool {
	let trimmed = line.trim();
	trimmed.is_empty() || trimmed.starts_with('#')
}

fn skip_output<'a, I>(lines: &mut Peekable<I>)
where
	I: Iterator<Item = (&'a str, u32)>,
{
	while lines.next_if(|(line, _)| !line.trim().is_empty()).is_some() {}
}

pub(crate) fn parse_command(text: &str, line_number: u32) -> Result<Command, ParseError> {
	let trimmed = text.trim();
	let (fail, rest) = match trimmed.strip_prefix('!') {
		Some(rest) => (true, rest.trim_start()),
		None => (false, trimmed),
	};

	let (name, raw) = match rest.split_once(char::is_whitespace) {
		Some((name, raw)) => (name, raw.trim()),
		None => (rest, ""),
	};
	if name.is_empty() {
		return Err(ParseError::new(line_number, "missing command name"));
	}

	Ok(Command {
		name: name.to_string(),
		args: tokenize(raw, line_number)?,
		raw: raw.to_string(),
		line: text.to_string(),
		fail,
		line_number,
	})
}

fn tokenize(raw: &str, line_number: u32) -> Result<Vec<Argument>, ParseError> {
	let mut chars = raw.chars().peekable();
	let mut args = Vec::new();

	loop {
		while chars.next_if(|c| c.is_whitespace()).is_some() {}
		if chars.peek().is_none() {
			return Ok(args);
		}

		let mut key = None;
		let mut value = String::new();
		while let Some(&c) = chars.peek() {
			match c {
				c if c.is_whitespace() => break,
				'\'' | '"' => {
					chars.next();
					let mut closed = false;
					for next in chars.by_ref() {
						if next == c {
							closed = true;
							break;
						}
						value.push(next);
					}
					if !closed {
						return Err(ParseError::new(line_number, format!("unterminated {c}")));
					}
				}
				'=' if key.is_none() && !value.is_empty() => {
					chars.next();
					key = Some(std::mem::take(&mut value));
				}
				c => {
					chars.next();
					value.push(c);
				}
			}
		}

		args.push(Argument {
			key,
			value,
		});
	}
}
