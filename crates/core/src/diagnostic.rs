// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use serde::{Deserialize, Serialize};

use crate::fragment::OwnedFragment;

/// A structured description of a failure, rich enough to render for a user
/// or to log for an operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub fragment: OwnedFragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

/// Creates an internal error diagnostic with source location context.
pub fn internal_with_context(reason: impl Into<String>, file: &str, line: u32, column: u32, module_path: &str) -> Diagnostic {
	let reason = reason.into();

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error: {}", reason),
		fragment: OwnedFragment::None,
		label: Some(format!("Internal invariant violated at {}:{}:{}", file, line, column)),
		help: Some(
			"This is an internal error that should never occur in normal operation.\n\
			 Please file a bug report at: https://github.com/stratadb/stratadb/issues"
				.to_string(),
		),
		notes: vec![
			format!("Module: {}", module_path),
			"This error indicates a critical internal inconsistency.".to_string(),
		],
	}
}

/// Simplified internal error without location context.
pub fn internal(reason: impl Into<String>) -> Diagnostic {
	internal_with_context(reason, "unknown", 0, 0, "unknown")
}

/// Macro to create an internal error with automatic source location capture
#[macro_export]
macro_rules! internal_error {
	($reason:expr) => {
		$crate::diagnostic::internal_with_context($reason, file!(), line!(), column!(), module_path!())
	};
	($fmt:expr, $($arg:tt)*) => {
		$crate::diagnostic::internal_with_context(format!($fmt, $($arg)*), file!(), line!(), column!(), module_path!())
	};
}

/// Macro to return an internal error with automatic source location capture
#[macro_export]
macro_rules! return_internal_error {
	($reason:expr) => {
		return Err($crate::error::Error($crate::internal_error!($reason)))
	};
	($fmt:expr, $($arg:tt)*) => {
		return Err($crate::error::Error($crate::internal_error!($fmt, $($arg)*)))
	};
}
