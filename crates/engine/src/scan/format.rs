// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use strata_catalog::TableCapabilityDef;
use strata_core::{ElementShape, Kind, PhysicalRowFormat, RowType};

use crate::scan::element::deduce_element_shape;

/// Picks the physical row format for a scan's output. First match wins:
///
/// 1. Zero fields: a field list (the only encoding with a natural empty
///    row).
/// 2. Object tuples: scalar for single-field rows, otherwise the tuple is
///    kept as an object array.
/// 3. The engine's own record kind passes through as typed records.
/// 4. A lone generic-object, boolean, numeric or text field unwraps to a
///    bare scalar.
/// 5. Everything else gets a synthesized tagged row.
///
/// Scalar is preferred wherever a single-field row allows it, to avoid
/// wrapping every value in a one-slot tuple.
pub fn select_format(row_type: &RowType, shape: ElementShape) -> PhysicalRowFormat {
	let field_count = row_type.field_count();
	if field_count == 0 {
		return PhysicalRowFormat::FieldList;
	}
	match shape {
		ElementShape::ObjectTuple => {
			return if field_count == 1 {
				PhysicalRowFormat::Scalar
			} else {
				PhysicalRowFormat::ObjectArray
			};
		}
		ElementShape::TypedRecord => return PhysicalRowFormat::TypedRecord,
		ElementShape::BoxedScalar | ElementShape::GenericObject => {}
	}
	if field_count == 1 {
		if let Kind::Scalar(ty) = &row_type.fields()[0].kind {
			if ty.prefers_scalar() {
				return PhysicalRowFormat::Scalar;
			}
		}
	}
	PhysicalRowFormat::TaggedRow
}

/// The native format implied by a table's capabilities alone: object arrays
/// for tuple emitters, a synthesized record otherwise.
pub fn deduce_format(def: &TableCapabilityDef) -> PhysicalRowFormat {
	match deduce_element_shape(def) {
		ElementShape::ObjectTuple => PhysicalRowFormat::ObjectArray,
		_ => PhysicalRowFormat::TaggedRow,
	}
}
