// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tea_type::{Result, Value, Variable};

use crate::Column;

/// Read access to a dataset, as needed to evaluate expressions against it.
pub trait DatasetAccessor {
	/// Name of the column holding participant identifiers.
	fn participant_column(&self) -> &str;

	/// Participant identifiers in row order.
	fn participants(&self) -> &[Value];

	/// Metadata of a registered variable. Fails for unregistered names.
	fn variable(&self, name: &str) -> Result<&Variable>;

	/// Data of a registered variable keyed by participant. Fails for
	/// unregistered names.
	fn column(&self, name: &str) -> Result<Column>;
}
