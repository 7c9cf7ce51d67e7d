// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Direct interpretation of compiled scan expressions.
//!
//! Lowers a [`CompiledScanExpression`] to an executable pull-based row
//! sequence. The sequence is single-pass; dropping it releases the
//! underlying source whether or not iteration ran to completion.

use std::sync::Arc;

use strata_core::{
	AccessExpr, BoxedRowSequence, FieldConversion, IterSequence, PhysicalRowFormat, RecordShape, RowSequence,
	RowTransform, SequenceExpr, Value,
};

use crate::scan::CompiledScanExpression;

/// Opens an executable row sequence for a compiled scan.
pub fn open(compiled: &CompiledScanExpression) -> BoxedRowSequence {
	eval(&compiled.expr)
}

fn eval(expr: &SequenceExpr) -> BoxedRowSequence {
	match expr {
		SequenceExpr::Source(access) => open_access(access),
		// Boxing and adapting are representational: interpreted values are
		// already boxed, so both lower to the inner sequence.
		SequenceExpr::BoxedPrimitives(inner) | SequenceExpr::Adapted(inner) | SequenceExpr::Narrowed(inner) => {
			eval(inner)
		}
		SequenceExpr::Mapped {
			input,
			transform,
		} => Box::new(MappedSequence {
			input: eval(input),
			transform: transform.clone(),
		}),
	}
}

fn open_access(access: &AccessExpr) -> BoxedRowSequence {
	match access {
		AccessExpr::PrimitiveArray {
			values, ..
		} => Box::new(IterSequence::new(values.clone().into_iter())),
		AccessExpr::Iterable(source) | AccessExpr::Sequence(source) => source.open(),
		AccessExpr::Composable(query) => query.sequence_view(),
	}
}

struct MappedSequence {
	input: BoxedRowSequence,
	transform: RowTransform,
}

impl RowSequence for MappedSequence {
	fn next(&mut self) -> Option<Value> {
		self.input.next().map(|row| apply(&self.transform, row))
	}
}

fn apply(transform: &RowTransform, row: Value) -> Value {
	match transform {
		RowTransform::ExtractScalar => match row {
			Value::Tuple(values) => values.into_iter().next().unwrap_or(Value::Undefined),
			other => other,
		},
		RowTransform::Rebuild {
			native,
			target,
			fields,
			shape,
		} => {
			let extracted: Vec<Value> = fields
				.iter()
				.map(|conversion| {
					let value = extract(&row, *native, conversion.index());
					match conversion {
						FieldConversion::Direct {
							..
						} => value,
						FieldConversion::NestedLists {
							..
						} => nested_lists(value),
					}
				})
				.collect();
			construct(*target, extracted, shape)
		}
	}
}

/// Pulls field `index` out of a row in the given native encoding.
fn extract(row: &Value, native: PhysicalRowFormat, index: usize) -> Value {
	match (native, row) {
		(PhysicalRowFormat::Scalar, value) => value.clone(),
		(PhysicalRowFormat::ObjectArray, Value::Tuple(values))
		| (PhysicalRowFormat::FieldList, Value::List(values))
		| (PhysicalRowFormat::TypedRecord, Value::Row(values))
		| (
			PhysicalRowFormat::TaggedRow,
			Value::Record {
				values, ..
			},
		) => values.get(index).cloned().unwrap_or(Value::Undefined),
		_ => Value::Undefined,
	}
}

fn construct(target: PhysicalRowFormat, values: Vec<Value>, shape: &Option<Arc<RecordShape>>) -> Value {
	match target {
		PhysicalRowFormat::Scalar => values.into_iter().next().unwrap_or(Value::Undefined),
		PhysicalRowFormat::ObjectArray => Value::Tuple(values),
		PhysicalRowFormat::FieldList => Value::List(values),
		PhysicalRowFormat::TypedRecord => Value::Row(values),
		PhysicalRowFormat::TaggedRow => {
			let shape = shape.clone().unwrap_or_else(|| RecordShape::anonymous(values.len()));
			Value::record(shape, values)
		}
	}
}

/// Converts a collection of struct elements to an ordered list of field
/// lists, materializing the outer collection. Undefined passes through for
/// absent nullable fields.
fn nested_lists(value: Value) -> Value {
	match value {
		Value::List(elements) | Value::Tuple(elements) => {
			Value::List(elements.into_iter().map(to_field_list).collect())
		}
		other => other,
	}
}

fn to_field_list(element: Value) -> Value {
	match element {
		Value::Tuple(values) | Value::Row(values) => Value::List(values),
		Value::Record {
			values, ..
		} => Value::List(values),
		other => other,
	}
}

#[cfg(test)]
mod tests {
	use strata_catalog::{Capability, TableCapabilityDef};
	use strata_core::{ComposableQuery, ElementType, FeatureFlags, FieldDef, Kind, RowSource, RowType, Type};

	use super::*;
	use crate::scan::compile_scan;

	fn collect(compiled: &CompiledScanExpression) -> Vec<Value> {
		let mut sequence = open(compiled);
		let mut rows = Vec::new();
		while let Some(row) = sequence.next() {
			rows.push(row);
		}
		rows
	}

	fn two_field_row() -> RowType {
		RowType::new(vec![
			FieldDef::new("id", Kind::Scalar(Type::Int8), false),
			FieldDef::new("name", Kind::Scalar(Type::Utf8), true),
		])
	}

	#[test]
	fn test_scannable_tuples_pass_through_as_object_arrays() {
		let rows = vec![
			Value::Tuple(vec![Value::Int8(1), Value::from("a")]),
			Value::Tuple(vec![Value::Int8(2), Value::from("b")]),
		];
		let def = TableCapabilityDef::new("users")
			.with_capability(Capability::Scannable)
			.with_access(AccessExpr::Sequence(RowSource::from_values(rows.clone())));
		let compiled = compile_scan(&def, &two_field_row(), &FeatureFlags::default()).unwrap().unwrap();
		assert_eq!(compiled.format, PhysicalRowFormat::ObjectArray);
		assert_eq!(collect(&compiled), rows);
	}

	#[test]
	fn test_single_field_scannable_unwraps_to_scalars() {
		let rows = vec![
			Value::Tuple(vec![Value::Int4(10)]),
			Value::Tuple(vec![Value::Int4(20)]),
		];
		let def = TableCapabilityDef::new("numbers")
			.with_capability(Capability::Scannable)
			.with_access(AccessExpr::Sequence(RowSource::from_values(rows)));
		let row_type = RowType::new(vec![FieldDef::new("v", Kind::Scalar(Type::Int4), false)]);
		let compiled = compile_scan(&def, &row_type, &FeatureFlags::default()).unwrap().unwrap();
		assert_eq!(compiled.format, PhysicalRowFormat::Scalar);
		assert_eq!(collect(&compiled), vec![Value::Int4(10), Value::Int4(20)]);
	}

	#[test]
	fn test_primitive_array_access_is_boxed_and_unwrapped() {
		let def = TableCapabilityDef::new("primes")
			.with_capability(Capability::BulkEnumerable)
			.with_element_type(ElementType::Scalar(Type::Int4))
			.with_row_format(PhysicalRowFormat::Scalar)
			.with_access(AccessExpr::PrimitiveArray {
				ty: Type::Int4,
				values: vec![Value::Int4(2), Value::Int4(3), Value::Int4(5)],
			});
		let row_type = RowType::new(vec![FieldDef::new("p", Kind::Scalar(Type::Int4), false)]);
		let compiled = compile_scan(&def, &row_type, &FeatureFlags::default()).unwrap().unwrap();
		assert_eq!(compiled.format, PhysicalRowFormat::Scalar);
		assert_eq!(collect(&compiled), vec![Value::Int4(2), Value::Int4(3), Value::Int4(5)]);
	}

	#[test]
	fn test_composable_query_take_applies_on_narrowed_view() {
		let rows: Vec<Value> = (0..5).map(|i| Value::Tuple(vec![Value::Int8(i), Value::from("x")])).collect();
		let query = ComposableQuery::new(RowSource::from_values(rows)).take(2);
		let def = TableCapabilityDef::new("events")
			.with_capability(Capability::Scannable)
			.with_access(AccessExpr::Composable(query));
		let compiled = compile_scan(&def, &two_field_row(), &FeatureFlags::default()).unwrap().unwrap();
		assert_eq!(collect(&compiled).len(), 2);
	}

	#[test]
	fn test_declared_field_list_rebuilds_to_object_array() {
		let rows = vec![Value::List(vec![Value::Int8(1), Value::from("a")])];
		let def = TableCapabilityDef::new("users")
			.with_capability(Capability::Scannable)
			.with_row_format(PhysicalRowFormat::FieldList)
			.with_access(AccessExpr::Sequence(RowSource::from_values(rows)));
		let compiled = compile_scan(&def, &two_field_row(), &FeatureFlags::default()).unwrap().unwrap();
		assert_eq!(compiled.format, PhysicalRowFormat::ObjectArray);
		assert_eq!(collect(&compiled), vec![Value::Tuple(vec![Value::Int8(1), Value::from("a")])]);
	}

	#[test]
	fn test_array_of_struct_becomes_list_of_field_lists() {
		let element = RowType::new(vec![
			FieldDef::new("x", Kind::Scalar(Type::Int4), false),
			FieldDef::new("y", Kind::Scalar(Type::Int4), false),
		]);
		let row_type = RowType::new(vec![
			FieldDef::new("id", Kind::Scalar(Type::Int8), false),
			FieldDef::new("points", Kind::Array(Box::new(Kind::Struct(element))), true),
		]);
		let rows = vec![Value::Tuple(vec![
			Value::Int8(1),
			Value::List(vec![
				Value::Tuple(vec![Value::Int4(1), Value::Int4(2)]),
				Value::Tuple(vec![Value::Int4(3), Value::Int4(4)]),
			]),
		])];
		let def = TableCapabilityDef::new("shapes")
			.with_capability(Capability::Scannable)
			.with_access(AccessExpr::Sequence(RowSource::from_values(rows)));
		let compiled = compile_scan(&def, &row_type, &FeatureFlags::all()).unwrap().unwrap();
		assert_eq!(compiled.format, PhysicalRowFormat::ObjectArray);
		assert_eq!(
			collect(&compiled),
			vec![Value::Tuple(vec![
				Value::Int8(1),
				Value::List(vec![
					Value::List(vec![Value::Int4(1), Value::Int4(2)]),
					Value::List(vec![Value::Int4(3), Value::Int4(4)]),
				]),
			])]
		);
	}

	#[test]
	fn test_undefined_collection_field_passes_through() {
		let element = RowType::new(vec![FieldDef::new("x", Kind::Scalar(Type::Int4), false)]);
		let row_type = RowType::new(vec![
			FieldDef::new("id", Kind::Scalar(Type::Int8), false),
			FieldDef::new("points", Kind::Multiset(Box::new(Kind::Struct(element))), true),
		]);
		let rows = vec![Value::Tuple(vec![Value::Int8(1), Value::Undefined])];
		let def = TableCapabilityDef::new("shapes")
			.with_capability(Capability::Scannable)
			.with_access(AccessExpr::Sequence(RowSource::from_values(rows.clone())));
		let compiled = compile_scan(&def, &row_type, &FeatureFlags::all()).unwrap().unwrap();
		assert_eq!(collect(&compiled), rows);
	}

	#[test]
	fn test_bulk_enumerable_row_elements_stay_typed_records() {
		let rows = vec![Value::Row(vec![Value::Int8(7), Value::from("x")])];
		let def = TableCapabilityDef::new("t")
			.with_capability(Capability::BulkEnumerable)
			.with_element_type(ElementType::Rows)
			.with_row_format(PhysicalRowFormat::TypedRecord)
			.with_access(AccessExpr::Sequence(RowSource::from_values(rows.clone())));
		let compiled = compile_scan(&def, &two_field_row(), &FeatureFlags::default()).unwrap().unwrap();
		// Typed records are the selected format here, so rows flow through
		// unchanged.
		assert_eq!(compiled.format, PhysicalRowFormat::TypedRecord);
		assert_eq!(collect(&compiled), rows);
	}

	#[test]
	fn test_zero_field_rows_become_empty_field_lists() {
		let rows = vec![Value::Tuple(vec![]), Value::Tuple(vec![])];
		let def = TableCapabilityDef::new("empty")
			.with_capability(Capability::Scannable)
			.with_row_format(PhysicalRowFormat::ObjectArray)
			.with_access(AccessExpr::Sequence(RowSource::from_values(rows)));
		let compiled = compile_scan(&def, &RowType::empty(), &FeatureFlags::default()).unwrap().unwrap();
		assert_eq!(compiled.format, PhysicalRowFormat::FieldList);
		assert_eq!(collect(&compiled), vec![Value::List(vec![]), Value::List(vec![])]);
	}
}
