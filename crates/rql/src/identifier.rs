// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{self, Display, Formatter};

use strata_core::OwnedFragment;

/// A possibly-qualified identifier as it appears in a statement, with the
/// fragment it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedIdentifier {
	pub segments: Vec<String>,
	pub fragment: OwnedFragment,
}

impl QualifiedIdentifier {
	pub fn new(segments: Vec<impl Into<String>>, fragment: OwnedFragment) -> Self {
		Self {
			segments: segments.into_iter().map(Into::into).collect(),
			fragment,
		}
	}

	pub fn simple(name: impl Into<String>) -> Self {
		let name = name.into();
		let fragment = OwnedFragment::internal(name.clone());
		Self {
			segments: vec![name],
			fragment,
		}
	}

	/// The dot-joined key identifying this identifier within a list.
	pub fn qualified_key(&self) -> String {
		self.segments.join(".")
	}

	/// The unqualified trailing segment.
	pub fn name(&self) -> &str {
		self.segments.last().map(String::as_str).unwrap_or("")
	}
}

impl Display for QualifiedIdentifier {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.qualified_key())
	}
}
