// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod expression;

pub use expression::{
	EqualExpression, Expression, GreaterThanEqualExpression, GreaterThanExpression, LessThanEqualExpression,
	LessThanExpression, LiteralExpression, MeanExpression, NotEqualExpression, RelateExpression, VariableExpression,
};
