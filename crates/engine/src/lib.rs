// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use tea_type::Result;

mod analysis;
mod design;
mod error;
mod evaluate;

pub use analysis::{
	CategoricalSummary, CombinedData, CombinedProperties, DataProperties, DescriptiveExecutor, Distribution,
	GroupProperties, NumericSummary, ResData, Role, RoleData, TestExecutor, assign_roles,
	compute_combined_properties, compute_data_properties,
};
pub use design::{DEFAULT_ALPHA, Design, DesignBuilder, DesignError, StudyType};
pub use error::EvalError;
pub use evaluate::{Evaluation, Metadata, StandardEvaluator, VarData, evaluate};
