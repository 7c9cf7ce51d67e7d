// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use strata_catalog::{Capability, TableCapabilityDef};
use strata_core::{ElementShape, ElementType};

/// Deduces the native per-row value shape a table emits.
///
/// Total and deterministic. A bulk-enumerable table emits whatever it
/// declares; without a concrete declaration it is assumed to emit object
/// tuples. The pushdown and streaming capabilities always emit object
/// tuples. Anything else is an opaque object per row.
pub fn deduce_element_shape(def: &TableCapabilityDef) -> ElementShape {
	if def.implements(Capability::BulkEnumerable) {
		return match def.element_type {
			Some(ElementType::Rows) => ElementShape::TypedRecord,
			Some(ElementType::Tuple) => ElementShape::ObjectTuple,
			Some(ElementType::Scalar(_)) => ElementShape::BoxedScalar,
			Some(ElementType::Opaque) => ElementShape::GenericObject,
			None => ElementShape::ObjectTuple,
		};
	}
	if def.implements(Capability::Scannable)
		|| def.implements(Capability::Filterable)
		|| def.implements(Capability::FilterableProjectable)
		|| def.implements(Capability::Streamable)
	{
		return ElementShape::ObjectTuple;
	}
	ElementShape::GenericObject
}
