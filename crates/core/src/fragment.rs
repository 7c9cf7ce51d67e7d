// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A fragment of source text that an error or identifier points back to.
///
/// `Statement` fragments carry a 1-based line and 0-based column into the
/// statement that produced them. `Internal` fragments name compiler-generated
/// text that has no user-visible position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnedFragment {
	None,
	Statement {
		text: String,
		line: u32,
		column: u32,
	},
	Internal {
		text: String,
	},
}

impl OwnedFragment {
	pub fn internal(text: impl Into<String>) -> Self {
		OwnedFragment::Internal {
			text: text.into(),
		}
	}

	pub fn statement(text: impl Into<String>, line: u32, column: u32) -> Self {
		OwnedFragment::Statement {
			text: text.into(),
			line,
			column,
		}
	}

	/// The text this fragment covers, empty for `None`.
	pub fn value(&self) -> &str {
		match self {
			OwnedFragment::None => "",
			OwnedFragment::Statement {
				text, ..
			} => text,
			OwnedFragment::Internal {
				text,
			} => text,
		}
	}

	pub fn line(&self) -> u32 {
		match self {
			OwnedFragment::Statement {
				line, ..
			} => *line,
			_ => 1,
		}
	}

	pub fn column(&self) -> u32 {
		match self {
			OwnedFragment::Statement {
				column, ..
			} => *column,
			_ => 0,
		}
	}
}

impl Default for OwnedFragment {
	fn default() -> Self {
		OwnedFragment::None
	}
}

impl Display for OwnedFragment {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			OwnedFragment::None => Ok(()),
			OwnedFragment::Statement {
				text,
				line,
				column,
			} => {
				write!(f, "'{}' at {}:{}", text, line, column)
			}
			OwnedFragment::Internal {
				text,
			} => write!(f, "'{}'", text),
		}
	}
}
