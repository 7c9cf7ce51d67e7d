// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::Write;

use strata_core::{AccessExpr, FieldConversion, RowTransform, SequenceExpr};

use crate::scan::CompiledScanExpression;

/// Renders a compiled scan as an indented operator tree.
pub fn explain_scan(compiled: &CompiledScanExpression) -> String {
	let mut output = String::new();
	writeln!(output, "Scan format={}", compiled.format).unwrap();
	render_sequence_expr(&compiled.expr, "", true, &mut output);
	output
}

fn write_node_header(output: &mut String, prefix: &str, is_last: bool, label: &str) {
	let branch = if is_last {
		"└──"
	} else {
		"├──"
	};
	writeln!(output, "{}{} {}", prefix, branch, label).unwrap();
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
	format!(
		"{}{}",
		prefix,
		if is_last {
			"    "
		} else {
			"│   "
		}
	)
}

fn render_sequence_expr(expr: &SequenceExpr, prefix: &str, is_last: bool, output: &mut String) {
	match expr {
		SequenceExpr::Source(access) => {
			write_node_header(output, prefix, is_last, &format!("Source {}", access_label(access)));
		}
		SequenceExpr::BoxedPrimitives(inner) => {
			write_node_header(output, prefix, is_last, "BoxPrimitives");
			render_sequence_expr(inner, &child_prefix(prefix, is_last), true, output);
		}
		SequenceExpr::Adapted(inner) => {
			write_node_header(output, prefix, is_last, "AsSequence");
			render_sequence_expr(inner, &child_prefix(prefix, is_last), true, output);
		}
		SequenceExpr::Narrowed(inner) => {
			write_node_header(output, prefix, is_last, "SequenceView");
			render_sequence_expr(inner, &child_prefix(prefix, is_last), true, output);
		}
		SequenceExpr::Mapped {
			input,
			transform,
		} => {
			write_node_header(output, prefix, is_last, &transform_label(transform));
			render_sequence_expr(input, &child_prefix(prefix, is_last), true, output);
		}
	}
}

fn access_label(access: &AccessExpr) -> String {
	match access {
		AccessExpr::PrimitiveArray {
			ty, ..
		} => format!("primitive-array<{}>", ty),
		AccessExpr::Iterable(_) => "iterable".to_string(),
		AccessExpr::Composable(_) => "composable-query".to_string(),
		AccessExpr::Sequence(_) => "sequence".to_string(),
	}
}

fn transform_label(transform: &RowTransform) -> String {
	match transform {
		RowTransform::ExtractScalar => "Map extract-scalar".to_string(),
		RowTransform::Rebuild {
			native,
			target,
			fields,
			..
		} => {
			let nested = fields.iter().filter(|f| matches!(f, FieldConversion::NestedLists { .. })).count();
			let mut label = format!("Map rebuild {} -> {} fields={}", native, target, fields.len());
			if nested > 0 {
				write!(label, " nested-lists={}", nested).unwrap();
			}
			label
		}
	}
}
