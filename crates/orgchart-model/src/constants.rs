/// Rank assigned to the very first designation created in an empty store.
/// Smaller ranks are more senior; nothing may ever outrank the root.
pub const ROOT_RANK: f64 = 1.0;

/// Minimum length for employee names and designation titles.
pub const NAME_MIN_LEN: usize = 2;

/// Maximum length for employee names and designation titles.
pub const NAME_MAX_LEN: usize = 30;
