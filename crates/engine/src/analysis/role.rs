// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tea_type::Result;
use tracing::{debug, instrument};

use crate::{Design, DesignError, evaluate::VarData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Independent,
	Dependent,
	Unassigned,
}

impl Display for Role {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Role::Independent => f.write_str("independent"),
			Role::Dependent => f.write_str("dependent"),
			Role::Unassigned => f.write_str("unassigned"),
		}
	}
}

/// Tags every variable with the role the design gives its source variable.
#[instrument(name = "engine::analysis::assign_roles", level = "debug", skip_all)]
pub fn assign_roles(vars: Vec<VarData>, design: &Design) -> Result<Vec<(VarData, Role)>> {
	vars.into_iter()
		.map(|data| {
			let role = match (design.is_independent(data.name()), design.is_dependent(data.name())) {
				(true, true) => {
					return Err(DesignError::ConflictingRoles {
						variable: data.name().to_string(),
					}
					.into());
				}
				(true, false) => Role::Independent,
				(false, true) => Role::Dependent,
				(false, false) => Role::Unassigned,
			};
			debug!(variable = data.name(), %role, "role assigned");
			Ok((data, role))
		})
		.collect()
}
