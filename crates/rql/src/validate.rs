// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::HashMap;

use strata_core::Error;

use crate::{error::RqlError, identifier::QualifiedIdentifier};

/// Produces the error reported for a duplicated identifier, given the first
/// clashing identifier and every position its key occurs at.
pub type ValidationErrorFn = dyn Fn(&QualifiedIdentifier, &[usize]) -> Error;

/// The standard duplicate report: a positioned error naming the identifier.
pub fn duplicate_identifier_error(identifier: &QualifiedIdentifier, positions: &[usize]) -> Error {
	RqlError::DuplicateIdentifier {
		name: identifier.qualified_key(),
		positions: positions.to_vec(),
		fragment: identifier.fragment.clone(),
	}
	.into()
}

/// Checks a list of identifiers for duplicates under their qualified keys.
///
/// Without an error function the check is a no-op. Partitions are visited
/// in unspecified order, so when several keys are duplicated, which one is
/// reported first is not defined, only that some duplicate is.
pub fn check_identifier_list_for_duplicates(
	identifiers: &[QualifiedIdentifier],
	on_error: Option<&ValidationErrorFn>,
) -> crate::Result<()> {
	let Some(on_error) = on_error else {
		return Ok(());
	};

	let mut partitions: HashMap<String, Vec<usize>> = HashMap::new();
	for (position, identifier) in identifiers.iter().enumerate() {
		partitions.entry(identifier.qualified_key()).or_default().push(position);
	}

	for positions in partitions.values() {
		if positions.len() > 1 {
			return Err(on_error(&identifiers[positions[0]], positions));
		}
	}
	Ok(())
}
