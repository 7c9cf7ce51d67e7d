// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use once_cell::sync::Lazy;

/// Process-wide switches for composite column support in table scans.
///
/// All default to off. The process defaults are read once from the
/// environment; compiler operations additionally accept an explicit value
/// so a compilation stays a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureFlags {
	pub array: bool,
	pub map: bool,
	pub multiset: bool,
}

static PROCESS: Lazy<FeatureFlags> = Lazy::new(FeatureFlags::from_env);

impl FeatureFlags {
	pub const fn new(array: bool, map: bool, multiset: bool) -> Self {
		Self {
			array,
			map,
			multiset,
		}
	}

	pub const fn all() -> Self {
		Self::new(true, true, true)
	}

	/// Reads `STRATA_ENABLE_TABLESCAN_{ARRAY,MAP,MULTISET}`.
	pub fn from_env() -> Self {
		Self {
			array: env_flag("STRATA_ENABLE_TABLESCAN_ARRAY"),
			map: env_flag("STRATA_ENABLE_TABLESCAN_MAP"),
			multiset: env_flag("STRATA_ENABLE_TABLESCAN_MULTISET"),
		}
	}

	/// The process-wide defaults, resolved once.
	pub fn process() -> &'static FeatureFlags {
		&PROCESS
	}
}

fn env_flag(name: &str) -> bool {
	std::env::var(name).map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}
