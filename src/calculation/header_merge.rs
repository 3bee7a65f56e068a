//! Header merging.
//!
//! The export places a sparse group label row above a sub-label row. A group
//! label applies to every following column until the next non-empty group
//! label, so the two rows merge into one `"<group>/<sub-label>"` path per
//! column.

use crate::models::{FlatHeader, RawCell};

/// Merges a parent (group) header row and a child (sub-label) header row.
///
/// Columns are visited left to right. A non-empty parent cell becomes the
/// current group label; blank parent cells inherit it. The path for a column
/// is the group label alone when the child cell is empty, the child label
/// alone when no group label has appeared yet, and `"<group>/<child>"`
/// otherwise. The output has one path per column of the longer row.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::merge_header_rows;
/// use attendance_engine::models::RawCell;
///
/// let parent = vec![RawCell::from("A"), RawCell::Empty, RawCell::from("B")];
/// let child = vec![RawCell::from("x"), RawCell::from("y"), RawCell::from("z")];
///
/// let header = merge_header_rows(&parent, &child);
/// assert_eq!(header.paths(), ["A/x", "A/y", "B/z"]);
/// ```
pub fn merge_header_rows(parent_row: &[RawCell], child_row: &[RawCell]) -> FlatHeader {
    let columns = parent_row.len().max(child_row.len());
    let mut last_parent = String::new();
    let mut paths = Vec::with_capacity(columns);

    for i in 0..columns {
        let parent = cell_label(parent_row, i);
        if !parent.is_empty() {
            last_parent = parent;
        }

        let child = cell_label(child_row, i);
        let path = match (last_parent.is_empty(), child.is_empty()) {
            (_, true) => last_parent.clone(),
            (true, false) => child,
            (false, false) => format!("{}/{}", last_parent, child),
        };
        paths.push(path);
    }

    FlatHeader::new(paths)
}

fn cell_label(row: &[RawCell], index: usize) -> String {
    row.get(index)
        .map(RawCell::canonical_string)
        .unwrap_or_default()
}
