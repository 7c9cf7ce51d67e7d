// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod matcher;
mod uniquify;

pub use matcher::NameMatcher;
pub use uniquify::{Suggester, expr_suggester, uniquify};
