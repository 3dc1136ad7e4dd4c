// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Parses the textual form expressions display as, so scripts can write
//! `(age > 10) <= 30` instead of building the tree by hand.
//!
//! Comparisons are left associative: `age > 10 <= 30` filters `age > 10`
//! by `<= 30`.

use std::{iter::Peekable, str::Chars};

use tea_expression::Expression;
use tea_type::{Operator, Value};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid expression '{input}': {message}")]
pub struct ExpressionError {
	pub input: String,
	pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
	Identifier(String),
	Literal(Value),
	Operator(Operator),
	OpenParen,
	CloseParen,
	Comma,
	Semicolon,
}

pub fn parse(input: &str) -> Result<Expression, ExpressionError> {
	let error = |message: String| ExpressionError {
		input: input.to_string(),
		message,
	};

	let tokens = tokenize(input).map_err(error)?;
	let mut parser = Parser {
		tokens: tokens.into_iter().peekable(),
	};
	let expression = parser.comparison().map_err(error)?;
	match parser.tokens.next() {
		None => Ok(expression),
		Some(token) => Err(error(format!("unexpected {token:?}"))),
	}
}

fn tokenize(input: &str) -> Result<Vec<Token>, String> {
	let mut chars = input.chars().peekable();
	let mut tokens = Vec::new();

	while let Some(&c) = chars.peek() {
		let token = match c {
			c if c.is_whitespace() => {
				chars.next();
				continue;
			}
			'(' | ')' | ',' | ';' => {
				chars.next();
				match c {
					'(' => Token::OpenParen,
					')' => Token::CloseParen,
					',' => Token::Comma,
					_ => Token::Semicolon,
				}
			}
			'\'' | '"' => {
				chars.next();
				let text = chars.by_ref().take_while(|&next| next != c).collect::<String>();
				Token::Literal(Value::utf8(text))
			}
			'=' | '!' | '<' | '>' => Token::Operator(scan_operator(&mut chars)?),
			'-' | '0'..='9' => Token::Literal(scan_number(&mut chars)?),
			c if c.is_alphabetic() || c == '_' => {
				let mut word = String::new();
				while let Some(next) = chars.next_if(|n| n.is_alphanumeric() || *n == '_') {
					word.push(next);
				}
				match word.as_str() {
					"true" => Token::Literal(Value::bool(true)),
					"false" => Token::Literal(Value::bool(false)),
					"undefined" => Token::Literal(Value::Undefined),
					_ => Token::Identifier(word),
				}
			}
			other => return Err(format!("unexpected character '{other}'")),
		};
		tokens.push(token);
	}
	Ok(tokens)
}

fn scan_operator(chars: &mut Peekable<Chars>) -> Result<Operator, String> {
	let first = chars.next().unwrap_or_default();
	let equals = chars.next_if_eq(&'=').is_some();
	Ok(match (first, equals) {
		('=', true) => Operator::Equal,
		('!', true) => Operator::NotEqual,
		('<', true) => Operator::LessThanEqual,
		('<', false) => Operator::LessThan,
		('>', true) => Operator::GreaterThanEqual,
		('>', false) => Operator::GreaterThan,
		(other, _) => return Err(format!("incomplete operator '{other}'")),
	})
}

fn scan_number(chars: &mut Peekable<Chars>) -> Result<Value, String> {
	let mut number = String::new();
	if let Some(sign) = chars.next_if_eq(&'-') {
		number.push(sign);
	}
	while let Some(next) = chars.next_if(|n| n.is_ascii_digit() || *n == '.') {
		number.push(next);
	}

	if number.contains('.') {
		number.parse::<f64>().map(Value::float8).map_err(|_| format!("invalid number '{number}'"))
	} else {
		number.parse::<i64>().map(Value::int8).map_err(|_| format!("invalid number '{number}'"))
	}
}

struct Parser {
	tokens: Peekable<std::vec::IntoIter<Token>>,
}

impl Parser {
	fn comparison(&mut self) -> Result<Expression, String> {
		let mut left = self.operand()?;
		while let Some(Token::Operator(operator)) = self.tokens.peek().cloned() {
			self.tokens.next();
			let right = self.operand()?;
			left = match operator {
				Operator::Equal => left.equal(right),
				Operator::NotEqual => left.not_equal(right),
				Operator::LessThan => left.less_than(right),
				Operator::LessThanEqual => left.less_than_equal(right),
				Operator::GreaterThan => left.greater_than(right),
				Operator::GreaterThanEqual => left.greater_than_equal(right),
			};
		}
		Ok(left)
	}

	fn operand(&mut self) -> Result<Expression, String> {
		match self.tokens.next() {
			Some(Token::OpenParen) => {
				let inner = self.comparison()?;
				self.expect(Token::CloseParen)?;
				Ok(inner)
			}
			Some(Token::Literal(value)) => Ok(Expression::literal(value)),
			Some(Token::Identifier(name)) if self.tokens.peek() == Some(&Token::OpenParen) => {
				self.tokens.next();
				self.call(&name)
			}
			Some(Token::Identifier(name)) => Ok(Expression::variable(name)),
			Some(token) => Err(format!("unexpected {token:?}")),
			None => Err("unexpected end of input".to_string()),
		}
	}

	fn call(&mut self, name: &str) -> Result<Expression, String> {
		match name {
			"mean" => {
				let var = self.comparison()?;
				self.expect(Token::CloseParen)?;
				Ok(Expression::mean(var))
			}
			"relate" => {
				let vars = self.list()?;
				let predictions = if self.tokens.next_if_eq(&Token::Semicolon).is_some() {
					self.list()?
				} else {
					vec![]
				};
				self.expect(Token::CloseParen)?;
				Ok(Expression::relate(vars).with_predictions(predictions))
			}
			other => Err(format!("unknown function '{other}'")),
		}
	}

	fn list(&mut self) -> Result<Vec<Expression>, String> {
		let mut items = vec![self.comparison()?];
		while self.tokens.next_if_eq(&Token::Comma).is_some() {
			items.push(self.comparison()?);
		}
		Ok(items)
	}

	fn expect(&mut self, expected: Token) -> Result<(), String> {
		match self.tokens.next() {
			Some(token) if token == expected => Ok(()),
			Some(token) => Err(format!("expected {expected:?}, found {token:?}")),
			None => Err(format!("expected {expected:?}, found end of input")),
		}
	}
}
