// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use strata_core::{AccessExpr, SequenceExpr};

/// Normalizes a table's raw access expression into the canonical lazy
/// sequence.
///
/// - A native fixed array of unboxed primitives is boxed into an ordered
///   list, then wrapped as a sequence.
/// - A non-canonical iterable goes through the adapter.
/// - A composable query is narrowed to its plain sequence view; combinators
///   such as the bounded prefix take are only correctly interpreted by the
///   outer compiler on the plain view.
/// - An already-canonical sequence passes through.
pub fn to_sequence(access: AccessExpr) -> SequenceExpr {
	let result = match access {
		raw @ AccessExpr::PrimitiveArray {
			..
		} => SequenceExpr::adapted(SequenceExpr::boxed_primitives(SequenceExpr::source(raw))),
		raw @ AccessExpr::Iterable(_) => SequenceExpr::adapted(SequenceExpr::source(raw)),
		raw @ AccessExpr::Composable(_) => SequenceExpr::narrowed(SequenceExpr::source(raw)),
		raw @ AccessExpr::Sequence(_) => SequenceExpr::source(raw),
	};
	debug_assert!(result.yields_sequence(), "accessor normalization must produce the canonical sequence type");
	result
}
