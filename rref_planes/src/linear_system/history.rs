use std::fmt;

use super::matrix::Matrix;

// row indices are zero based, Display prints them one based
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowOperation {
    Initial,
    Swap {
        first: usize,
        second: usize,
    },
    Scale {
        row: usize,
        factor: f64,
    },
    Eliminate {
        target: usize,
        pivot_row: usize,
        factor: f64,
    },
}

impl fmt::Display for RowOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Initial => write!(f, "initial system"),
            Self::Swap { first, second } => write!(f, "R{} ↔ R{}", first + 1, second + 1),
            Self::Scale { row, factor } => {
                write!(f, "R{} → {:.2}·R{}", row + 1, factor + 0.0, row + 1)
            }
            Self::Eliminate {
                target,
                pivot_row,
                factor,
            } => {
                let (sign, magnitude) = if factor < 0.0 {
                    ('+', -factor)
                } else {
                    ('−', factor)
                };
                write!(
                    f,
                    "R{} → R{} {sign} {magnitude:.2}·R{}",
                    target + 1,
                    target + 1,
                    pivot_row + 1
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub operation: RowOperation,
    pub matrix: Matrix,
}

// Every entry owns a deep copy of the matrix at that point of the reduction.
// Only the reduction itself appends, so a returned History never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    steps: Vec<Step>,
}

impl History {
    pub(crate) fn starting_at(initial: &Matrix) -> Self {
        Self {
            steps: vec![Step {
                operation: RowOperation::Initial,
                matrix: initial.clone(),
            }],
        }
    }

    pub(crate) fn record(&mut self, operation: RowOperation, matrix: &Matrix) {
        log::trace!("step {}: {operation}\n{matrix}", self.steps.len());
        self.steps.push(Step {
            operation,
            matrix: matrix.clone(),
        });
    }

    // never zero, the initial matrix is always there
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn first(&self) -> &Matrix {
        &self.steps[0].matrix
    }

    pub fn last(&self) -> &Matrix {
        &self.steps[self.steps.len() - 1].matrix
    }

    pub fn matrices(&self) -> impl Iterator<Item = &Matrix> {
        self.steps.iter().map(|step| &step.matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_row_operations_one_based() {
        assert_eq!(
            RowOperation::Swap {
                first: 0,
                second: 2
            }
            .to_string(),
            "R1 ↔ R3"
        );
        assert_eq!(
            RowOperation::Scale {
                row: 1,
                factor: 0.5
            }
            .to_string(),
            "R2 → 0.50·R2"
        );
        assert_eq!(
            RowOperation::Eliminate {
                target: 2,
                pivot_row: 0,
                factor: 2.0
            }
            .to_string(),
            "R3 → R3 − 2.00·R1"
        );
        assert_eq!(
            RowOperation::Eliminate {
                target: 0,
                pivot_row: 1,
                factor: -1.5
            }
            .to_string(),
            "R1 → R1 + 1.50·R2"
        );
    }

    #[test]
    fn recorded_steps_are_snapshots() {
        let mut matrix = Matrix::zeroes(1, 2);
        let mut history = History::starting_at(&matrix);
        matrix.set(0, 0, 5.0).unwrap();
        history.record(RowOperation::Scale { row: 0, factor: 5.0 }, &matrix);
        matrix.set(0, 0, 7.0).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.first().get(0, 0), 0.0);
        assert_eq!(history.last().get(0, 0), 5.0);
        assert_eq!(history.get(0).unwrap().operation, RowOperation::Initial);
        assert!(history.get(2).is_none());
    }
}
