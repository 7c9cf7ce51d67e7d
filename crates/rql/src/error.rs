// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use strata_core::{Diagnostic, Error, OwnedFragment};

/// Trait for errors that can be converted into diagnostics
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RqlError {
	#[error("Duplicate identifier '{name}'")]
	DuplicateIdentifier {
		name: String,
		positions: Vec<usize>,
		fragment: OwnedFragment,
	},
}

impl IntoDiagnostic for RqlError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			RqlError::DuplicateIdentifier {
				name,
				positions,
				fragment,
			} => Diagnostic {
				code: "VALIDATE_001".to_string(),
				message: format!("Duplicate identifier '{}'", name),
				fragment,
				label: Some("this identifier appears more than once".to_string()),
				help: Some("Rename or alias the duplicate so every identifier in the list is unique".to_string()),
				notes: vec![format!(
					"Occurs at positions {}",
					positions.iter().map(usize::to_string).collect::<Vec<_>>().join(", ")
				)],
			},
		}
	}
}

impl From<RqlError> for Error {
	fn from(err: RqlError) -> Self {
		Error(err.into_diagnostic())
	}
}
