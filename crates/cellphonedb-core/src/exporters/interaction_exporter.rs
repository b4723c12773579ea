//! Export view of expanded interactions

use crate::table::Table;

pub const MULTIDATA_NAME_1: &str = "multidata_name_1";
pub const MULTIDATA_NAME_2: &str = "multidata_name_2";

/// Generic annotation names renamed for export
pub const RENAMES: [(&str, &str); 2] = [("name_1", MULTIDATA_NAME_1), ("name_2", MULTIDATA_NAME_2)];

/// Columns an exported table may contain
pub const ALLOWED_COLUMNS: [&str; 8] = [
    "comments",
    "entry_name_1",
    "entry_name_2",
    MULTIDATA_NAME_1,
    MULTIDATA_NAME_2,
    "score_1",
    "score_2",
    "source",
];

/// Columns moved to the front, in this order
pub const LEADING_COLUMNS: [&str; 4] = [
    MULTIDATA_NAME_1,
    "entry_name_1",
    MULTIDATA_NAME_2,
    "entry_name_2",
];

/// Normalize an expanded interaction table for presentation
///
/// The rename of `name_1` / `name_2` happens on `interactions_expanded`
/// itself; callers keep seeing the renamed header afterwards. Pruning and
/// reordering only affect the returned copy. Absent columns are omitted.
///
/// When the input already has `multidata_name_1` (or `_2`), the matching
/// `name_*` column is not renamed; it keeps its name and is pruned, and the
/// existing `multidata_name_*` column is exported.
pub fn call(interactions_expanded: &mut Table) -> Table {
    interactions_expanded.rename_columns(&RENAMES);

    let mut exported = interactions_expanded.clone();
    exported.retain_columns(&ALLOWED_COLUMNS);

    exported.bring_columns_to_start(&LEADING_COLUMNS)
}
