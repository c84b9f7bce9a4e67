use super::pivot::find_leading_pivot_column;
use super::rref::RrefRecorder;

impl RrefRecorder {
    // walk the rows bottom up and clear every entry above a leading pivot
    pub(super) fn back_substitute(&mut self) {
        let variable_columns = self.working.number_of_variables();
        let mut i = self.working.number_of_rows();
        while i > 0 {
            i -= 1;
            let Some(column) = find_leading_pivot_column(self.working.row(i), variable_columns)
            else {
                continue;
            };
            for above in 0..i {
                self.eliminate_with_pivot(above, i, column);
            }
        }
    }
}
