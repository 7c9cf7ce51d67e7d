// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

pub mod execute;
pub mod explain;
pub mod scan;

pub use explain::explain_scan;
pub use scan::{CompiledScanExpression, compile_scan};

pub type Result<T> = strata_core::Result<T>;
