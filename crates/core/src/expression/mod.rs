// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! The typed scan IR.
//!
//! A small, language-agnostic expression tree built at plan-compilation
//! time: wrappers that normalize a table's raw access expression into the
//! canonical lazy sequence, and per-row transforms that reshape rows into
//! the selected physical format. It can be interpreted directly (see
//! `strata-engine::execute`) or lowered to a backend's native closures.

use std::sync::Arc;

use crate::{
	interface::PhysicalRowFormat,
	sequence::{ComposableQuery, RowSource},
	value::{RecordShape, Type, Value},
};

/// A table's raw access expression, as handed over by the table adapter.
///
/// A closed tagged variant set: the compiler dispatches on the declared
/// shape of the access expression, never on runtime type tests.
#[derive(Debug, Clone)]
pub enum AccessExpr {
	/// A native fixed array of unboxed primitives.
	PrimitiveArray {
		ty: Type,
		values: Vec<Value>,
	},
	/// A non-canonical iterable that needs an adapter.
	Iterable(RowSource),
	/// The richer composable-query supertype of the sequence view.
	Composable(ComposableQuery),
	/// Already the canonical lazy sequence.
	Sequence(RowSource),
}

impl AccessExpr {
	pub fn is_sequence(&self) -> bool {
		matches!(self, AccessExpr::Sequence(_))
	}
}

/// One conversion step for a single field position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldConversion {
	/// Extract the field value unchanged.
	Direct {
		index: usize,
	},
	/// Extract a collection-of-struct field and convert it to an ordered
	/// list of field lists, materializing the outer collection. The element
	/// type is not statically nameable by the consumer, so the element rows
	/// must travel in the field-list encoding.
	NestedLists {
		index: usize,
	},
}

impl FieldConversion {
	pub fn index(&self) -> usize {
		match self {
			FieldConversion::Direct {
				index,
			}
			| FieldConversion::NestedLists {
				index,
			} => *index,
		}
	}
}

/// A per-row transform applied to every element of a sequence.
#[derive(Debug, Clone)]
pub enum RowTransform {
	/// Extract position 0 of a one-element tuple.
	ExtractScalar,
	/// Extract every field from the native encoding and assemble a row in
	/// the target encoding.
	Rebuild {
		native: PhysicalRowFormat,
		target: PhysicalRowFormat,
		fields: Vec<FieldConversion>,
		/// Present iff `target` is `TaggedRow`.
		shape: Option<Arc<RecordShape>>,
	},
}

/// A lazy-sequence expression over a table's rows.
#[derive(Debug, Clone)]
pub enum SequenceExpr {
	/// The raw access expression, unmodified.
	Source(AccessExpr),
	/// Box a fixed array of unboxed primitives into an ordered list.
	BoxedPrimitives(Box<SequenceExpr>),
	/// Wrap an iterable (or boxed list) as the canonical lazy sequence.
	Adapted(Box<SequenceExpr>),
	/// Narrow a composable query to its plain lazy-sequence view.
	Narrowed(Box<SequenceExpr>),
	/// Apply a per-row transform to every element.
	Mapped {
		input: Box<SequenceExpr>,
		transform: RowTransform,
	},
}

impl SequenceExpr {
	pub fn source(access: AccessExpr) -> Self {
		SequenceExpr::Source(access)
	}

	pub fn boxed_primitives(input: SequenceExpr) -> Self {
		SequenceExpr::BoxedPrimitives(Box::new(input))
	}

	pub fn adapted(input: SequenceExpr) -> Self {
		SequenceExpr::Adapted(Box::new(input))
	}

	pub fn narrowed(input: SequenceExpr) -> Self {
		SequenceExpr::Narrowed(Box::new(input))
	}

	pub fn mapped(input: SequenceExpr, transform: RowTransform) -> Self {
		SequenceExpr::Mapped {
			input: Box::new(input),
			transform,
		}
	}

	/// Whether this expression's static type is the canonical lazy
	/// sequence.
	pub fn yields_sequence(&self) -> bool {
		match self {
			SequenceExpr::Source(access) => access.is_sequence(),
			SequenceExpr::BoxedPrimitives(_) => false,
			SequenceExpr::Adapted(_) | SequenceExpr::Narrowed(_) => true,
			SequenceExpr::Mapped {
				input, ..
			} => input.yields_sequence(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_yields_sequence() {
		let canonical = SequenceExpr::source(AccessExpr::Sequence(RowSource::from_values(vec![])));
		assert!(canonical.yields_sequence());

		let raw_array = SequenceExpr::source(AccessExpr::PrimitiveArray {
			ty: Type::Int4,
			values: vec![],
		});
		assert!(!raw_array.yields_sequence());

		let boxed = SequenceExpr::boxed_primitives(raw_array);
		assert!(!boxed.yields_sequence());
		assert!(SequenceExpr::adapted(boxed).yields_sequence());
	}

	#[test]
	fn test_mapped_preserves_sequence_kind() {
		let canonical = SequenceExpr::source(AccessExpr::Sequence(RowSource::from_values(vec![])));
		let mapped = SequenceExpr::mapped(canonical, RowTransform::ExtractScalar);
		assert!(mapped.yields_sequence());
	}
}
