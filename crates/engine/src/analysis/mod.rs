// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod combined;
mod execute;
mod properties;
mod role;
mod statistics;

pub use combined::{CombinedData, CombinedProperties, GroupProperties, RoleData, compute_combined_properties};
pub use execute::{DescriptiveExecutor, ResData, TestExecutor};
pub use properties::{CategoricalSummary, DataProperties, Distribution, NumericSummary, compute_data_properties};
pub use role::{Role, assign_roles};
