// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use tea_type::{Diagnostic, Error, IntoDiagnostic, Result};
use tracing::instrument;

pub const DEFAULT_ALPHA: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StudyType {
	#[default]
	#[serde(rename = "experiment")]
	Experiment,
	#[serde(rename = "observational study", alias = "observational_study")]
	ObservationalStudy,
}

impl Display for StudyType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			StudyType::Experiment => f.write_str("experiment"),
			StudyType::ObservationalStudy => f.write_str("observational study"),
		}
	}
}

/// Study design: which variables are manipulated or observed, and how
/// participants are assigned to conditions.
///
/// Keys accept the spaced form (`"independent variables"`) as well as snake
/// case. Variable lists accept a single name or a list of names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
	#[serde(rename = "study type", alias = "study_type", default)]
	pub study_type: StudyType,

	#[serde(
		rename = "independent variables",
		alias = "independent_variables",
		alias = "independent",
		default,
		deserialize_with = "one_or_many"
	)]
	pub independent: Vec<String>,

	#[serde(
		rename = "dependent variables",
		alias = "dependent_variables",
		alias = "dependent",
		default,
		deserialize_with = "one_or_many"
	)]
	pub dependent: Vec<String>,

	#[serde(
		rename = "between subjects",
		alias = "between_subjects",
		default,
		deserialize_with = "one_or_many",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub between_subjects: Vec<String>,

	#[serde(
		rename = "within subjects",
		alias = "within_subjects",
		default,
		deserialize_with = "one_or_many",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub within_subjects: Vec<String>,

	#[serde(default = "default_alpha")]
	pub alpha: f64,
}

fn default_alpha() -> f64 {
	DEFAULT_ALPHA
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
	One(String),
	Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match OneOrMany::deserialize(deserializer)? {
		OneOrMany::One(name) => vec![name],
		OneOrMany::Many(names) => names,
	})
}

impl Default for Design {
	fn default() -> Self {
		Self {
			study_type: StudyType::default(),
			independent: vec![],
			dependent: vec![],
			between_subjects: vec![],
			within_subjects: vec![],
			alpha: DEFAULT_ALPHA,
		}
	}
}

impl Design {
	pub fn builder() -> DesignBuilder {
		DesignBuilder::default()
	}

	#[instrument(name = "engine::design::from_json", level = "debug", skip(json))]
	pub fn from_json(json: &str) -> Result<Design> {
		let design: Design = serde_json::from_str(json).map_err(|err| DesignError::Parse {
			reason: err.to_string(),
		})?;
		design.validate()?;
		Ok(design)
	}

	pub fn validate(&self) -> Result<()> {
		if let Some(name) = self.independent.iter().find(|name| self.dependent.contains(name)) {
			return Err(DesignError::ConflictingRoles {
				variable: name.clone(),
			}
			.into());
		}
		if !(self.alpha > 0.0 && self.alpha < 1.0) {
			return Err(DesignError::InvalidAlpha {
				alpha: self.alpha,
			}
			.into());
		}
		Ok(())
	}

	pub fn is_independent(&self, name: &str) -> bool {
		self.independent.iter().any(|n| n == name)
	}

	pub fn is_dependent(&self, name: &str) -> bool {
		self.dependent.iter().any(|n| n == name)
	}
}

#[derive(Debug, Default)]
pub struct DesignBuilder {
	design: Design,
}

impl DesignBuilder {
	pub fn study_type(mut self, study_type: StudyType) -> Self {
		self.design.study_type = study_type;
		self
	}

	pub fn independent(mut self, name: impl Into<String>) -> Self {
		self.design.independent.push(name.into());
		self
	}

	pub fn dependent(mut self, name: impl Into<String>) -> Self {
		self.design.dependent.push(name.into());
		self
	}

	pub fn between_subjects(mut self, name: impl Into<String>) -> Self {
		self.design.between_subjects.push(name.into());
		self
	}

	pub fn within_subjects(mut self, name: impl Into<String>) -> Self {
		self.design.within_subjects.push(name.into());
		self
	}

	pub fn alpha(mut self, alpha: f64) -> Self {
		self.design.alpha = alpha;
		self
	}

	pub fn build(self) -> Result<Design> {
		self.design.validate()?;
		Ok(self.design)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum DesignError {
	#[error("variable '{variable}' is declared both independent and dependent")]
	ConflictingRoles {
		variable: String,
	},

	#[error("invalid study design: {reason}")]
	Parse {
		reason: String,
	},

	#[error("alpha must lie strictly between 0 and 1, got {alpha}")]
	InvalidAlpha {
		alpha: f64,
	},
}

impl IntoDiagnostic for DesignError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			DesignError::ConflictingRoles {
				variable,
			} => Diagnostic {
				code: "DESIGN_001".to_string(),
				message,
				fragment: Some(variable),
				label: Some("conflicting roles".to_string()),
				help: Some("a variable is either independent or dependent".to_string()),
				notes: vec![],
			},

			DesignError::Parse {
				..
			} => Diagnostic {
				code: "DESIGN_002".to_string(),
				message,
				fragment: None,
				label: None,
				help: Some(
					"expected keys: study type, independent variables, dependent variables, between subjects, within subjects, alpha"
						.to_string(),
				),
				notes: vec![],
			},

			DesignError::InvalidAlpha {
				alpha,
			} => Diagnostic {
				code: "DESIGN_003".to_string(),
				message,
				fragment: Some(alpha.to_string()),
				label: Some("invalid significance level".to_string()),
				help: Some(format!("the conventional significance level is {}", DEFAULT_ALPHA)),
				notes: vec![],
			},
		}
	}
}

impl From<DesignError> for Error {
	fn from(err: DesignError) -> Self {
		Error(err.into_diagnostic())
	}
}
