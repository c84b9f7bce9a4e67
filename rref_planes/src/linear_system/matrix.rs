use std::fmt;
use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;

use crate::tolerance::snap_to_zero;

// augmented matrix of a linear system: every row holds the coefficients
// followed by the right-hand-side constant in the last column.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    number_of_columns: usize,
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeroes(rows: usize, cols: usize) -> Self {
        Self {
            number_of_columns: cols,
            rows: (0..rows).map(|_| vec![0.0; cols]).collect(),
        }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let number_of_columns = rows.first().map(|row| row.len()).unwrap_or(0);
        for (idx, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == number_of_columns,
                "row {} has {} entries, expected {}",
                idx + 1,
                row.len(),
                number_of_columns
            );
            ensure!(
                row.iter().all(|v| v.is_finite()),
                "row {} contains a non-finite entry",
                idx + 1
            );
        }
        Ok(Self {
            number_of_columns,
            rows,
        })
    }

    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn number_of_columns(&self) -> usize {
        self.number_of_columns
    }

    // the last column holds constants, everything before it is a variable
    pub fn number_of_variables(&self) -> usize {
        self.number_of_columns.saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.number_of_columns == 0
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.rows[r]
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.rows[r][c]
    }

    pub fn set(&mut self, r: usize, c: usize, v: f64) -> Result<()> {
        ensure!(
            r < self.number_of_rows() && c < self.number_of_columns,
            "cell ({r}, {c}) is outside of a {}x{} matrix",
            self.number_of_rows(),
            self.number_of_columns
        );
        ensure!(v.is_finite(), "cell ({r}, {c}) cannot hold {v}");
        self.rows[r][c] = v;
        Ok(())
    }

    pub fn push_row(&mut self, row: Vec<f64>) -> Result<()> {
        ensure!(
            row.len() == self.number_of_columns,
            "new row has {} entries, expected {}",
            row.len(),
            self.number_of_columns
        );
        self.rows.push(row);
        Ok(())
    }

    pub fn remove_row(&mut self, r: usize) -> Result<Vec<f64>> {
        ensure!(
            r < self.number_of_rows(),
            "cannot remove row {r} of a matrix with {} rows",
            self.number_of_rows()
        );
        Ok(self.rows.remove(r))
    }

    pub(crate) fn swap_rows(&mut self, first: usize, second: usize) {
        self.rows.swap(first, second);
    }

    pub(crate) fn scale_row(&mut self, r: usize, factor: f64) {
        for v in self.rows[r].iter_mut() {
            *v = snap_to_zero(*v * factor);
        }
    }

    // rows[target] -= factor * rows[pivot]
    pub(crate) fn subtract_row_multiple(&mut self, target: usize, pivot: usize, factor: f64) {
        debug_assert_ne!(target, pivot);
        for c in 0..self.number_of_columns {
            let pivot_value = self.rows[pivot][c];
            let v = &mut self.rows[target][c];
            *v = snap_to_zero(*v - factor * pivot_value);
        }
    }
}

// fixed-size rows are rectangular by construction
impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix {
    fn from(rows: [[f64; C]; R]) -> Self {
        Self {
            number_of_columns: C,
            rows: rows.iter().map(|row| row.to_vec()).collect(),
        }
    }
}

// "1, 1, 1, 3; 1 -1 1 1" -> two rows
impl FromStr for Matrix {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .split(';')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .enumerate()
            .map(|(idx, row)| {
                row.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|entry| !entry.is_empty())
                    .map(|entry| {
                        entry
                            .parse::<f64>()
                            .with_context(|| format!("parsing '{entry}' in row {}", idx + 1))
                    })
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<Vec<Vec<f64>>>>()?;
        if rows.is_empty() {
            bail!("no rows found in '{s}'");
        }
        Matrix::from_rows(rows)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variables = self.number_of_variables();
        for row in &self.rows {
            let coefficients = row[..variables]
                .iter()
                .map(|v| format!("{:>7.2}", v + 0.0))
                .join(" ");
            match row.get(variables) {
                Some(constant) => writeln!(f, "[{coefficients} | {:>7.2} ]", constant + 0.0)?,
                None => writeln!(f, "[{coefficients} ]")?,
            }
        }
        Ok(())
    }
}
