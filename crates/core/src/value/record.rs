// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{
	collections::HashMap,
	sync::{Arc, RwLock},
};

use once_cell::sync::Lazy;

use crate::interface::RowType;

/// A synthesized named record shape.
///
/// Tagged rows need a nominal shape the execution engine can dispatch on.
/// Shapes are interned process-wide: two scans over the same row schema
/// share one `Arc<RecordShape>`, so shape identity doubles as schema
/// identity.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordShape {
	/// Synthesized tag, unique per distinct row schema.
	pub name: String,
	/// Field names in declaration order.
	pub fields: Vec<String>,
}

static REGISTRY: Lazy<RwLock<HashMap<String, Arc<RecordShape>>>> = Lazy::new(|| RwLock::new(HashMap::new()));

impl RecordShape {
	/// Returns the interned shape for `row_type`, synthesizing it on first
	/// use.
	pub fn of(row_type: &RowType) -> Arc<RecordShape> {
		let signature = signature_of(row_type);
		if let Some(shape) = REGISTRY.read().unwrap().get(&signature) {
			return shape.clone();
		}
		let mut registry = REGISTRY.write().unwrap();
		if let Some(shape) = registry.get(&signature) {
			return shape.clone();
		}
		let shape = Arc::new(RecordShape {
			name: format!("record${}", registry.len()),
			fields: row_type.fields().iter().map(|f| f.name.clone()).collect(),
		});
		registry.insert(signature, shape.clone());
		shape
	}

	/// Returns an interned positional shape of the given arity, for rows
	/// whose schema is not known by name.
	pub fn anonymous(arity: usize) -> Arc<RecordShape> {
		let signature = format!("?{}", arity);
		if let Some(shape) = REGISTRY.read().unwrap().get(&signature) {
			return shape.clone();
		}
		let mut registry = REGISTRY.write().unwrap();
		if let Some(shape) = registry.get(&signature) {
			return shape.clone();
		}
		let shape = Arc::new(RecordShape {
			name: format!("record${}", registry.len()),
			fields: (0..arity).map(|i| format!("f{}", i)).collect(),
		});
		registry.insert(signature, shape.clone());
		shape
	}

	pub fn arity(&self) -> usize {
		self.fields.len()
	}
}

fn signature_of(row_type: &RowType) -> String {
	let mut signature = String::new();
	for field in row_type.fields() {
		signature.push_str(&field.name);
		signature.push(':');
		signature.push_str(&field.kind.to_string());
		signature.push(';');
	}
	signature
}
