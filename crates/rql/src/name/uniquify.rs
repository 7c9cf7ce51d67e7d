// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{borrow::Cow, collections::HashSet};

use crate::name::matcher::NameMatcher;

/// Proposes a replacement for a clashing name. Arguments are the original
/// name, its position in the input and the retry attempt, starting at 0.
pub type Suggester = dyn Fn(&str, usize, usize) -> String;

/// The default suggester: appends the attempt counter to the original name
/// ("def" becomes "def0", then "def1", ...).
pub fn expr_suggester(original: &str, _index: usize, attempt: usize) -> String {
	format!("{}{}", original, attempt)
}

/// Makes every name unique under the given case policy, preserving original
/// names wherever possible.
///
/// Names are processed left to right; the first occurrence of a name keeps
/// it, later clashes are renamed through the suggester until an unused key
/// is found. When the input already contains no duplicates the borrowed
/// input is returned untouched, so callers can detect (and skip) the
/// no-change case without comparing element-wise.
pub fn uniquify<'a>(names: &'a [String], suggester: &Suggester, case_sensitive: bool) -> Cow<'a, [String]> {
	let matcher = NameMatcher::with_case_sensitive(case_sensitive);
	let mut used: HashSet<String> = HashSet::with_capacity(names.len());
	let mut out: Vec<String> = Vec::with_capacity(names.len());
	let mut changed = false;

	for (index, name) in names.iter().enumerate() {
		let mut candidate = name.clone();
		let mut attempt = 0;
		while !used.insert(matcher.key(&candidate)) {
			candidate = suggester(name, index, attempt);
			attempt += 1;
		}
		if candidate != *name {
			changed = true;
		}
		out.push(candidate);
	}

	if changed {
		Cow::Owned(out)
	} else {
		Cow::Borrowed(names)
	}
}
