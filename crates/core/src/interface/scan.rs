// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Type;

/// What a table declares it emits per row.
///
/// `BulkEnumerable` tables may leave this unset when the element type is not
/// statically nameable; every other capability implies `Tuple`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
	/// The engine's own positional record kind.
	Rows,
	/// A boxed object array, one slot per field.
	Tuple,
	/// A single boxed scalar per row.
	Scalar(Type),
	/// An opaque object the compiler knows nothing about.
	Opaque,
}

/// The native per-row value shape a table emits, derived from its
/// capability descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementShape {
	ObjectTuple,
	TypedRecord,
	BoxedScalar,
	GenericObject,
}

impl Display for ElementShape {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ElementShape::ObjectTuple => f.write_str("object-tuple"),
			ElementShape::TypedRecord => f.write_str("typed-record"),
			ElementShape::BoxedScalar => f.write_str("boxed-scalar"),
			ElementShape::GenericObject => f.write_str("generic-object"),
		}
	}
}

/// The canonical in-memory encodings for one row of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalRowFormat {
	/// The bare value of the single field, no wrapping.
	Scalar,
	/// A boxed object array, one slot per field.
	ObjectArray,
	/// An ordered list of field values.
	FieldList,
	/// The engine's own positional record kind.
	TypedRecord,
	/// A synthesized record shape, one per distinct row schema.
	TaggedRow,
}

impl Display for PhysicalRowFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			PhysicalRowFormat::Scalar => f.write_str("scalar"),
			PhysicalRowFormat::ObjectArray => f.write_str("object-array"),
			PhysicalRowFormat::FieldList => f.write_str("field-list"),
			PhysicalRowFormat::TypedRecord => f.write_str("typed-record"),
			PhysicalRowFormat::TaggedRow => f.write_str("tagged-row"),
		}
	}
}
