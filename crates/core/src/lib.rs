// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

pub mod diagnostic;
pub mod error;
pub mod expression;
pub mod flags;
pub mod fragment;
pub mod interface;
pub mod sequence;
pub mod value;

pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use expression::{AccessExpr, FieldConversion, RowTransform, SequenceExpr};
pub use flags::FeatureFlags;
pub use fragment::OwnedFragment;
pub use interface::{ElementShape, ElementType, FieldDef, Kind, PhysicalRowFormat, RowType};
pub use sequence::{BoxedRowSequence, ComposableQuery, IterSequence, RowSequence, RowSource};
pub use value::{RecordShape, Type, Value};
