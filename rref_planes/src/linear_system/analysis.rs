use std::fmt;

use glam::DVec3;
use itertools::Itertools;

use crate::tolerance::is_negligible;

use super::matrix::Matrix;
use super::pivot::find_leading_pivot_column;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    Consistent,
    Inconsistent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionType {
    None,
    Unique,
    InfiniteLine,
    InfinitePlane,
    // rank 0: every point satisfies the system
    AllSpace,
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "none",
            Self::Unique => "unique",
            Self::InfiniteLine => "infinite (line)",
            Self::InfinitePlane => "infinite (plane)",
            Self::AllSpace => "infinite (all of space)",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub consistency: Consistency,
    pub solution_type: SolutionType,
    pub summary: String,
    pub solution_point: Option<DVec3>,
    pub rank: usize,
    pub free_variables: usize,
}

impl AnalysisResult {
    fn inconsistent(summary: String, rank: usize) -> Self {
        Self {
            consistency: Consistency::Inconsistent,
            solution_type: SolutionType::None,
            summary,
            solution_point: None,
            rank,
            free_variables: 0,
        }
    }

    pub fn is_unique(&self) -> bool {
        self.solution_type == SolutionType::Unique
    }
}

const AXES: [&str; 3] = ["x", "y", "z"];

// first entry that is not ~0, or None for a zero row
fn first_nonzero_column(row: &[f64]) -> Option<usize> {
    row.iter().position(|v| !is_negligible(*v))
}

// -0.00 reads badly in summaries
fn tidy(v: f64) -> f64 {
    v + 0.0
}

// classifies a system from its reduced form, usually the last entry of a
// History. the caller makes sure the matrix is already reduced.
pub fn analyze(rref: &Matrix) -> AnalysisResult {
    if rref.number_of_rows() == 0 || rref.number_of_columns() < 2 {
        return AnalysisResult::inconsistent(
            format!(
                "Cannot classify a {}x{} matrix: need at least one equation and one variable.",
                rref.number_of_rows(),
                rref.number_of_columns()
            ),
            0,
        );
    }
    let number_of_variables = rref.number_of_variables();
    let mut rank = 0;
    for (idx, row) in rref.rows().iter().enumerate() {
        match first_nonzero_column(row) {
            Some(column) if column < number_of_variables => rank += 1,
            Some(_) => {
                log::debug!(
                    "row {} reads 0 = {}, system is inconsistent",
                    idx + 1,
                    row[number_of_variables]
                );
                return AnalysisResult::inconsistent(
                    format!(
                        "Inconsistent: row {} reduces to 0 = {:.2}, no point satisfies every equation.",
                        idx + 1,
                        tidy(row[number_of_variables])
                    ),
                    rank.min(number_of_variables),
                );
            }
            None => {}
        }
    }
    // a column skipped for lack of a pivot can pick up a just-above-EPSILON
    // entry later on, so more rows than variables may look led by a variable
    if rank > number_of_variables {
        log::warn!("{rank} leading rows for {number_of_variables} variables, clamping rank");
        rank = number_of_variables;
    }
    let free_variables = number_of_variables - rank;
    log::debug!("consistent system, rank {rank}, {free_variables} free variables");
    if free_variables == 0 {
        return unique_solution(rref, rank);
    }
    let solution_type = if rank == 0 {
        SolutionType::AllSpace
    } else if free_variables == 1 {
        SolutionType::InfiniteLine
    } else {
        SolutionType::InfinitePlane
    };
    let summary = match solution_type {
        SolutionType::AllSpace => {
            "Infinitely many solutions: every equation reads 0 = 0, all of space solves the system."
                .to_string()
        }
        SolutionType::InfiniteLine => format!(
            "Infinitely many solutions along a line: rank {rank}, {free_variables} free variable."
        ),
        _ => format!(
            "Infinitely many solutions on a plane: rank {rank}, {free_variables} free variables."
        ),
    };
    AnalysisResult {
        consistency: Consistency::Consistent,
        solution_type,
        summary,
        solution_point: None,
        rank,
        free_variables,
    }
}

fn unique_solution(rref: &Matrix, rank: usize) -> AnalysisResult {
    let number_of_variables = rref.number_of_variables();
    let mut point = [0.0; 3];
    for row in rref.rows().iter().take(rank) {
        if let Some(column) = find_leading_pivot_column(row, number_of_variables.min(3)) {
            point[column] = tidy(row[number_of_variables]);
        }
    }
    let values = point
        .iter()
        .zip(AXES)
        .take(number_of_variables.min(3))
        .map(|(v, axis)| format!("{axis} = {v:.2}"))
        .join(", ");
    AnalysisResult {
        consistency: Consistency::Consistent,
        solution_type: SolutionType::Unique,
        summary: format!("Unique solution: {values}"),
        solution_point: Some(DVec3::from_array(point)),
        rank,
        free_variables: 0,
    }
}
