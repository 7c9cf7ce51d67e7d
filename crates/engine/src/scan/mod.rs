// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Compiles a base-table access point into an executable lazy row
//! sequence whose physical encoding matches what the rest of the plan
//! expects.

pub mod access;
pub mod capability;
pub mod element;
pub mod format;
pub mod reshape;

use strata_catalog::TableCapabilityDef;
use strata_core::{FeatureFlags, PhysicalRowFormat, RowType, SequenceExpr, return_internal_error};
use tracing::instrument;

pub use self::{
	access::to_sequence,
	capability::{can_handle, supports_row_type},
	element::deduce_element_shape,
	format::{deduce_format, select_format},
	reshape::to_rows,
};

/// The compiled scan artifact: the selected physical row format and the
/// executable sequence expression producing rows in that format. Owned by
/// the caller, never mutated after creation.
#[derive(Debug, Clone)]
pub struct CompiledScanExpression {
	pub format: PhysicalRowFormat,
	pub expr: SequenceExpr,
}

/// Compiles one table scan.
///
/// `Ok(None)` means this strategy cannot serve the table (transient, no
/// scan capability, or a composite schema the feature flags disallow) and
/// the caller must pick another physical strategy. A table
/// that declares a capability but supplies no access expression is a broken
/// table adapter and aborts compilation of this node.
#[instrument(level = "trace", skip(def, row_type, flags), fields(table = %def.name))]
pub fn compile_scan(
	def: &TableCapabilityDef,
	row_type: &RowType,
	flags: &FeatureFlags,
) -> crate::Result<Option<CompiledScanExpression>> {
	if !capability::can_handle(def) || !capability::supports_row_type(row_type, flags) {
		return Ok(None);
	}

	let shape = element::deduce_element_shape(def);
	let format = format::select_format(row_type, shape);

	let Some(access) = def.access_expression() else {
		return_internal_error!("table '{}' declares a scan capability but supplied no access expression", def.name);
	};

	let sequence = access::to_sequence(access.clone());
	let expr = reshape::to_rows(sequence, def, row_type, shape, format);

	Ok(Some(CompiledScanExpression {
		format,
		expr,
	}))
}
