// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Type;

/// The kind of value a field carries.
///
/// A closed tag carried directly in the data model, so shape questions are
/// answered by pattern matching instead of runtime type inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Kind {
	Scalar(Type),
	Array(Box<Kind>),
	Multiset(Box<Kind>),
	Map(Box<Kind>, Box<Kind>),
	Struct(RowType),
}

impl Kind {
	pub fn is_composite(&self) -> bool {
		!matches!(self, Kind::Scalar(_))
	}

	/// Array or Multiset: the ordered/unordered collection kinds.
	pub fn is_collection(&self) -> bool {
		matches!(self, Kind::Array(_) | Kind::Multiset(_))
	}

	/// The element kind of a collection, None otherwise.
	pub fn element(&self) -> Option<&Kind> {
		match self {
			Kind::Array(element) | Kind::Multiset(element) => Some(element),
			_ => None,
		}
	}

	/// Whether this is a collection whose elements are structs. Such fields
	/// cannot be handed to a consumer as-is because the element type is not
	/// statically nameable.
	pub fn is_collection_of_struct(&self) -> bool {
		matches!(self.element(), Some(Kind::Struct(_)))
	}
}

impl Display for Kind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Kind::Scalar(ty) => write!(f, "{}", ty),
			Kind::Array(element) => write!(f, "ARRAY<{}>", element),
			Kind::Multiset(element) => write!(f, "MULTISET<{}>", element),
			Kind::Map(key, value) => write!(f, "MAP<{}, {}>", key, value),
			Kind::Struct(row_type) => {
				f.write_str("STRUCT<")?;
				for (i, field) in row_type.fields().iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{} {}", field.name, field.kind)?;
				}
				f.write_str(">")
			}
		}
	}
}

/// One field of a row type. Order within the row is significant: positions
/// are used for binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
	pub name: String,
	pub kind: Kind,
	pub nullable: bool,
}

impl FieldDef {
	pub fn new(name: impl Into<String>, kind: Kind, nullable: bool) -> Self {
		Self {
			name: name.into(),
			kind,
			nullable,
		}
	}
}

/// An ordered row type. Field names must be unique; positions are used for
/// binding, so order is part of the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowType {
	fields: Vec<FieldDef>,
}

impl RowType {
	/// Field names must be pairwise distinct. Policy-aware (case-folding)
	/// matching is the front-end's concern; the invariant checked here is
	/// exact.
	pub fn new(fields: Vec<FieldDef>) -> Self {
		debug_assert!(
			{
				let mut names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
				names.sort_unstable();
				names.windows(2).all(|w| w[0] != w[1])
			},
			"row type field names must be unique"
		);
		Self {
			fields,
		}
	}

	pub fn empty() -> Self {
		Self {
			fields: Vec::new(),
		}
	}

	pub fn fields(&self) -> &[FieldDef] {
		&self.fields
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	/// Whether any top-level field is an Array or Multiset.
	pub fn has_collection_field(&self) -> bool {
		self.fields.iter().any(|f| f.kind.is_collection())
	}
}
