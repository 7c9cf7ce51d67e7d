// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use strata_catalog::{Capability, TableCapabilityDef};
use strata_core::{ElementShape, FieldConversion, PhysicalRowFormat, RecordShape, RowTransform, RowType, SequenceExpr};

use crate::scan::format::select_format;

/// Emits the per-row conversion from the table's native encoding to the
/// selected physical format.
pub fn to_rows(
	sequence: SequenceExpr,
	def: &TableCapabilityDef,
	row_type: &RowType,
	shape: ElementShape,
	target: PhysicalRowFormat,
) -> SequenceExpr {
	// The pushdown capabilities emit one-element tuples even for logically
	// scalar rows, so a scalar target means unwrapping position 0.
	if target == PhysicalRowFormat::Scalar
		&& shape == ElementShape::ObjectTuple
		&& row_type.field_count() == 1
		&& (def.implements(Capability::Scannable)
			|| def.implements(Capability::Filterable)
			|| def.implements(Capability::FilterableProjectable))
	{
		return SequenceExpr::mapped(sequence, RowTransform::ExtractScalar);
	}

	let native = def.row_format.unwrap_or_else(|| select_format(row_type, shape));
	if native == target && !row_type.has_collection_field() {
		// Zero-copy: the native rows already are the selected encoding.
		return sequence;
	}

	let fields: Vec<FieldConversion> = row_type
		.fields()
		.iter()
		.enumerate()
		.map(|(index, field)| {
			if field.kind.is_collection_of_struct() {
				FieldConversion::NestedLists {
					index,
				}
			} else {
				FieldConversion::Direct {
					index,
				}
			}
		})
		.collect();

	let record_shape = (target == PhysicalRowFormat::TaggedRow).then(|| RecordShape::of(row_type));
	SequenceExpr::mapped(
		sequence,
		RowTransform::Rebuild {
			native,
			target,
			fields,
			shape: record_shape,
		},
	)
}

#[cfg(test)]
mod tests {
	use strata_core::{AccessExpr, FieldDef, Kind, RowSource, Type};

	use super::*;

	fn canonical_sequence() -> SequenceExpr {
		SequenceExpr::source(AccessExpr::Sequence(RowSource::from_values(vec![])))
	}

	fn scannable() -> TableCapabilityDef {
		TableCapabilityDef::new("t").with_capability(Capability::Scannable)
	}

	fn two_field_row() -> RowType {
		RowType::new(vec![
			FieldDef::new("id", Kind::Scalar(Type::Int8), false),
			FieldDef::new("name", Kind::Scalar(Type::Utf8), true),
		])
	}

	#[test]
	fn test_identity_when_format_matches_and_no_collections() {
		let def = scannable();
		let row_type = two_field_row();
		let result = to_rows(
			canonical_sequence(),
			&def,
			&row_type,
			ElementShape::ObjectTuple,
			PhysicalRowFormat::ObjectArray,
		);
		assert!(matches!(result, SequenceExpr::Source(_)), "expected the untouched input expression");
	}

	#[test]
	fn test_scalar_fast_path_extracts_position_zero() {
		let def = scannable();
		let row_type = RowType::new(vec![FieldDef::new("v", Kind::Scalar(Type::Int4), false)]);
		let result =
			to_rows(canonical_sequence(), &def, &row_type, ElementShape::ObjectTuple, PhysicalRowFormat::Scalar);
		assert!(matches!(
			result,
			SequenceExpr::Mapped {
				transform: RowTransform::ExtractScalar,
				..
			}
		));
	}

	#[test]
	fn test_declared_format_mismatch_rebuilds() {
		let def = scannable().with_row_format(PhysicalRowFormat::FieldList);
		let row_type = two_field_row();
		let result = to_rows(
			canonical_sequence(),
			&def,
			&row_type,
			ElementShape::ObjectTuple,
			PhysicalRowFormat::ObjectArray,
		);
		match result {
			SequenceExpr::Mapped {
				transform:
					RowTransform::Rebuild {
						native,
						target,
						fields,
						shape,
					},
				..
			} => {
				assert_eq!(native, PhysicalRowFormat::FieldList);
				assert_eq!(target, PhysicalRowFormat::ObjectArray);
				assert_eq!(
					fields,
					vec![
						FieldConversion::Direct {
							index: 0
						},
						FieldConversion::Direct {
							index: 1
						}
					]
				);
				assert!(shape.is_none());
			}
			other => panic!("expected a rebuild, got {:?}", other),
		}
	}

	#[test]
	fn test_collection_of_struct_forces_nested_lists() {
		let element = RowType::new(vec![FieldDef::new("x", Kind::Scalar(Type::Int4), false)]);
		let row_type = RowType::new(vec![
			FieldDef::new("id", Kind::Scalar(Type::Int8), false),
			FieldDef::new("items", Kind::Array(Box::new(Kind::Struct(element))), true),
		]);
		let def = scannable();
		// Native and target agree, but the collection field blocks the
		// zero-copy path.
		let result = to_rows(
			canonical_sequence(),
			&def,
			&row_type,
			ElementShape::ObjectTuple,
			PhysicalRowFormat::ObjectArray,
		);
		match result {
			SequenceExpr::Mapped {
				transform: RowTransform::Rebuild {
					fields, ..
				},
				..
			} => {
				assert_eq!(
					fields,
					vec![
						FieldConversion::Direct {
							index: 0
						},
						FieldConversion::NestedLists {
							index: 1
						}
					]
				);
			}
			other => panic!("expected a rebuild, got {:?}", other),
		}
	}

	#[test]
	fn test_plain_collection_field_stays_direct() {
		let row_type = RowType::new(vec![
			FieldDef::new("id", Kind::Scalar(Type::Int8), false),
			FieldDef::new("tags", Kind::Array(Box::new(Kind::Scalar(Type::Utf8))), true),
		]);
		let def = scannable();
		let result = to_rows(
			canonical_sequence(),
			&def,
			&row_type,
			ElementShape::ObjectTuple,
			PhysicalRowFormat::ObjectArray,
		);
		match result {
			SequenceExpr::Mapped {
				transform: RowTransform::Rebuild {
					fields, ..
				},
				..
			} => {
				assert!(fields.iter().all(|f| matches!(f, FieldConversion::Direct { .. })));
			}
			other => panic!("expected a rebuild, got {:?}", other),
		}
	}

	#[test]
	fn test_tagged_row_target_carries_record_shape() {
		let def = TableCapabilityDef::new("t")
			.with_capability(Capability::BulkEnumerable)
			.with_element_type(strata_core::ElementType::Opaque);
		let row_type = two_field_row();
		let result = to_rows(
			canonical_sequence(),
			&def,
			&row_type,
			ElementShape::GenericObject,
			PhysicalRowFormat::TaggedRow,
		);
		match result {
			// Native == target here, so only the absence of a collection
			// field would allow identity; TaggedRow == TaggedRow with no
			// collections is the identity case.
			SequenceExpr::Source(_) => {}
			other => panic!("expected identity, got {:?}", other),
		}

		// Force a mismatch to observe the synthesized shape.
		let def = def.with_row_format(PhysicalRowFormat::ObjectArray);
		let result = to_rows(
			canonical_sequence(),
			&def,
			&row_type,
			ElementShape::GenericObject,
			PhysicalRowFormat::TaggedRow,
		);
		match result {
			SequenceExpr::Mapped {
				transform: RowTransform::Rebuild {
					shape, ..
				},
				..
			} => {
				let shape = shape.expect("tagged-row targets carry a record shape");
				assert_eq!(shape.fields, vec!["id", "name"]);
			}
			other => panic!("expected a rebuild, got {:?}", other),
		}
	}
}
