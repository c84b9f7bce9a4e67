use crate::tolerance::{is_approximately_one, is_negligible};

// The leading pivot of a reduced row is the first variable column holding a
// value ~1 with nothing but ~0 to its left. A nonzero entry that is not ~1
// showing up first means the row has no leading pivot.
//
// Shared by back substitution and the solution analysis so both agree on
// which rows carry a pivot.
pub fn find_leading_pivot_column(row: &[f64], variable_columns: usize) -> Option<usize> {
    for (column, value) in row.iter().take(variable_columns).enumerate() {
        if is_approximately_one(*value) {
            return Some(column);
        }
        if !is_negligible(*value) {
            return None;
        }
    }
    None
}
