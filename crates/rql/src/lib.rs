// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

pub mod error;
pub mod identifier;
pub mod name;
pub mod validate;

pub use error::RqlError;
pub use identifier::QualifiedIdentifier;
pub use name::{NameMatcher, Suggester, expr_suggester, uniquify};
pub use validate::{ValidationErrorFn, check_identifier_list_for_duplicates, duplicate_identifier_error};

pub type Result<T> = strata_core::Result<T>;
