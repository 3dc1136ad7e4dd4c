// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
mod operator;
pub mod value;
mod variable;

pub use error::{Diagnostic, Error, IntoDiagnostic, Result};
pub use operator::Operator;
pub use value::{OrderedF64, Value};
pub use variable::{Categories, Range, StatisticalType, Variable};
