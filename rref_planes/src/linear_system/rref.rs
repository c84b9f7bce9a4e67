use crate::tolerance::{is_approximately_one, is_negligible, EPSILON};

use super::history::{History, RowOperation};
use super::matrix::Matrix;

// Replays Gauss-Jordan elimination on a working copy of the input and records
// a snapshot after every row operation that actually changes the matrix.
pub(super) struct RrefRecorder {
    pub(super) working: Matrix,
    pub(super) history: History,
    active_column: usize,
    pivot_row: usize,
}

pub fn compute_rref_history(initial: &Matrix) -> History {
    let mut recorder = RrefRecorder::new(initial);
    if initial.is_empty() {
        return recorder.history;
    }
    recorder.go_to_echelon_form();
    recorder.back_substitute();
    log::debug!(
        "reduced {}x{} system in {} steps",
        initial.number_of_rows(),
        initial.number_of_columns(),
        recorder.history.len()
    );
    recorder.history
}

impl RrefRecorder {
    fn new(initial: &Matrix) -> Self {
        Self {
            working: initial.clone(),
            history: History::starting_at(initial),
            active_column: 0,
            pivot_row: 0,
        }
    }

    fn go_to_echelon_form(&mut self) {
        while self.is_not_in_echelon_form() {
            self.pivot_active_column();
            self.go_to_next_column();
        }
    }

    // constants in the last column never pivot
    fn is_not_in_echelon_form(&self) -> bool {
        self.active_column < self.working.number_of_variables()
            && self.pivot_row < self.working.number_of_rows()
    }

    fn pivot_active_column(&mut self) {
        let Some(max_row) = self.find_pivot_candidate() else {
            // free column, the pivot row stays where it is
            return;
        };
        if max_row != self.pivot_row {
            self.working.swap_rows(self.pivot_row, max_row);
            self.history.record(
                RowOperation::Swap {
                    first: self.pivot_row,
                    second: max_row,
                },
                &self.working,
            );
        }
        self.normalize_pivot_row();
        let pivot_row = self.pivot_row;
        let other_rows = (0..self.working.number_of_rows()).filter(|&r| r != pivot_row);
        for row in other_rows {
            self.eliminate_with_pivot(row, pivot_row, self.active_column);
        }
        self.pivot_row += 1;
    }

    // partial pivoting: largest magnitude at or below the pivot row, the
    // earliest row wins ties
    fn find_pivot_candidate(&self) -> Option<usize> {
        let column = self.active_column;
        let mut max_row = self.pivot_row;
        let mut max_value = self.working.get(max_row, column).abs();
        for row in self.pivot_row + 1..self.working.number_of_rows() {
            let value = self.working.get(row, column).abs();
            if value > max_value {
                max_value = value;
                max_row = row;
            }
        }
        if max_value < EPSILON {
            None
        } else {
            Some(max_row)
        }
    }

    fn normalize_pivot_row(&mut self) {
        let pivot_value = self.working.get(self.pivot_row, self.active_column);
        if is_approximately_one(pivot_value) {
            return;
        }
        let factor = 1.0 / pivot_value;
        self.working.scale_row(self.pivot_row, factor);
        self.history.record(
            RowOperation::Scale {
                row: self.pivot_row,
                factor,
            },
            &self.working,
        );
    }

    pub(super) fn eliminate_with_pivot(&mut self, target: usize, pivot_row: usize, column: usize) {
        let factor = self.working.get(target, column);
        if is_negligible(factor) {
            return;
        }
        self.working.subtract_row_multiple(target, pivot_row, factor);
        self.history.record(
            RowOperation::Eliminate {
                target,
                pivot_row,
                factor,
            },
            &self.working,
        );
    }

    fn go_to_next_column(&mut self) {
        self.active_column += 1;
    }
}
