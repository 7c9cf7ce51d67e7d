// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{self, Display, Formatter};

use crate::diagnostic::Diagnostic;

/// The error type carried on every fallible path of the compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(&self) -> &Diagnostic {
		&self.0
	}

	pub fn into_diagnostic(self) -> Diagnostic {
		self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.0.code, self.0.message)
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}

pub type Result<T> = std::result::Result<T, Error>;
