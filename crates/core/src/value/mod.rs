// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod record;

use std::{
	fmt::{self, Display, Formatter},
	sync::Arc,
};

pub use record::RecordShape;
use serde::{Deserialize, Serialize};

/// All scalar data types a table column may carry.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Bool,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A UTF-8 encoded text
	Utf8,
	/// A binary large object
	Blob,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8 | Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Bool)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_blob(&self) -> bool {
		matches!(self, Type::Blob)
	}

	/// Whether a single-field row of this type is worth unwrapping to a bare
	/// scalar: generic objects, booleans, numbers and text. Blobs stay
	/// wrapped.
	pub fn prefers_scalar(&self) -> bool {
		matches!(self, Type::Undefined) || self.is_bool() || self.is_number() || self.is_utf8()
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Bool => f.write_str("BOOL"),
			Type::Float4 => f.write_str("FLOAT4"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Int1 => f.write_str("INT1"),
			Type::Int2 => f.write_str("INT2"),
			Type::Int4 => f.write_str("INT4"),
			Type::Int8 => f.write_str("INT8"),
			Type::Utf8 => f.write_str("UTF8"),
			Type::Blob => f.write_str("BLOB"),
			Type::Undefined => f.write_str("UNDEFINED"),
		}
	}
}

/// A runtime value, represented as a native Rust type.
///
/// The composite carriers mirror the physical row formats one-to-one:
/// `Tuple` is a boxed object array, `List` an ordered field list, `Row` the
/// engine's own positional record kind and `Record` a synthesized tagged
/// row. `Map` carries map-typed column values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Undefined,
	Bool(bool),
	Float4(f32),
	Float8(f64),
	Int1(i8),
	Int2(i16),
	Int4(i32),
	Int8(i64),
	Utf8(String),
	Blob(Vec<u8>),
	Tuple(Vec<Value>),
	List(Vec<Value>),
	Row(Vec<Value>),
	Record {
		shape: Arc<RecordShape>,
		values: Vec<Value>,
	},
	Map(Vec<(Value, Value)>),
}

impl Value {
	pub fn record(shape: Arc<RecordShape>, values: Vec<Value>) -> Self {
		Value::Record {
			shape,
			values,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int4(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int8(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float8(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Utf8(value)
	}
}
