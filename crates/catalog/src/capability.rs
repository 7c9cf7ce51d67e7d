// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The closed set of access patterns a table can implement.
///
/// Capability questions are answered by exhaustive pattern match over this
/// enum; adding a variant forces every dispatch site to take a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
	/// Hands out its full row collection for bulk enumeration and may
	/// declare the element type it emits.
	BulkEnumerable,
	/// Accepts filter pushdown.
	Filterable,
	/// Accepts filter and projection pushdown.
	FilterableProjectable,
	/// Plain full scan.
	Scannable,
	/// Emits an unbounded row stream.
	Streamable,
	/// Exists only for the duration of the enclosing query; cannot be
	/// re-pulled outside it.
	Transient,
}

impl Display for Capability {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Capability::BulkEnumerable => f.write_str("BULK_ENUMERABLE"),
			Capability::Filterable => f.write_str("FILTERABLE"),
			Capability::FilterableProjectable => f.write_str("FILTERABLE_PROJECTABLE"),
			Capability::Scannable => f.write_str("SCANNABLE"),
			Capability::Streamable => f.write_str("STREAMABLE"),
			Capability::Transient => f.write_str("TRANSIENT"),
		}
	}
}
