// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use strata_catalog::{Capability, TableCapabilityDef};
use strata_core::{FeatureFlags, Kind, RowType};

/// Whether a table's capabilities allow compiling it into a lazy row
/// sequence at all.
///
/// Transient tables are excluded outright: their rows exist only for the
/// duration of the enclosing query, so exposing them as a re-pullable
/// sequence would read freed state. For everything else at least one scan
/// capability must be implemented.
pub fn can_handle(def: &TableCapabilityDef) -> bool {
	if def.implements(Capability::Transient) {
		return false;
	}
	def.implements(Capability::BulkEnumerable)
		|| def.implements(Capability::Filterable)
		|| def.implements(Capability::FilterableProjectable)
		|| def.implements(Capability::Scannable)
}

/// Whether the row type only uses composite kinds the feature flags allow.
///
/// With all three flags enabled no inspection is needed. Otherwise any
/// top-level field of a flag-disabled composite kind rejects the table for
/// this strategy. Bare struct fields are not checked here.
pub fn supports_row_type(row_type: &RowType, flags: &FeatureFlags) -> bool {
	if flags.array && flags.map && flags.multiset {
		return true;
	}
	for field in row_type.fields() {
		let disabled = match &field.kind {
			Kind::Array(_) => !flags.array,
			Kind::Map(_, _) => !flags.map,
			Kind::Multiset(_) => !flags.multiset,
			Kind::Scalar(_) | Kind::Struct(_) => false,
		};
		if disabled {
			return false;
		}
	}
	true
}
