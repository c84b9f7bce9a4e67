use anyhow::{bail, ensure, Context, Result};
use rand::Rng;

use crate::geometry::SceneGeometry;
use crate::linear_system::residual::satisfies_system;
use crate::linear_system::{analyze, compute_rref_history, AnalysisResult, History, Matrix, Step};

use super::sample::{random_system, SampleSystem};
use super::step_cursor::StepCursor;

pub const MAX_EQUATIONS: usize = 4;
pub const NUMBER_OF_UNKNOWNS: usize = 3;

pub enum Phase {
    Editing,
    Computed {
        history: History,
        analysis: AnalysisResult,
        cursor: StepCursor,
    },
}

// Owns the system being edited and, once computed, its recorded reduction.
// Edits are only accepted while editing; reset() goes back to editing and
// drops the history.
pub struct Workbench {
    matrix: Matrix,
    phase: Phase,
}

impl Workbench {
    pub fn new(matrix: Matrix) -> Result<Self> {
        Self::check_shape(&matrix)?;
        Ok(Self {
            matrix,
            phase: Phase::Editing,
        })
    }

    pub fn from_sample(sample: SampleSystem) -> Self {
        Self {
            matrix: sample.matrix(),
            phase: Phase::Editing,
        }
    }

    fn check_shape(matrix: &Matrix) -> Result<()> {
        ensure!(
            matrix.number_of_columns() == NUMBER_OF_UNKNOWNS + 1,
            "expected {} columns ({NUMBER_OF_UNKNOWNS} coefficients and a constant), got {}",
            NUMBER_OF_UNKNOWNS + 1,
            matrix.number_of_columns()
        );
        ensure!(
            (1..=MAX_EQUATIONS).contains(&matrix.number_of_rows()),
            "expected between 1 and {MAX_EQUATIONS} equations, got {}",
            matrix.number_of_rows()
        );
        Ok(())
    }

    fn ensure_editing(&self) -> Result<()> {
        if let Phase::Computed { .. } = self.phase {
            bail!("the system has been computed, reset it before editing");
        }
        Ok(())
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, Phase::Editing)
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        self.ensure_editing()?;
        self.matrix.set(row, column, value)
    }

    pub fn add_row(&mut self) -> Result<()> {
        self.ensure_editing()?;
        ensure!(
            self.matrix.number_of_rows() < MAX_EQUATIONS,
            "at most {MAX_EQUATIONS} equations are supported"
        );
        self.matrix.push_row(vec![0.0; self.matrix.number_of_columns()])
    }

    pub fn remove_row(&mut self, row: usize) -> Result<()> {
        self.ensure_editing()?;
        ensure!(
            self.matrix.number_of_rows() > 1,
            "the system needs at least one equation"
        );
        self.matrix.remove_row(row)?;
        Ok(())
    }

    // loading a sample is also a way out of a computed state
    pub fn load_sample(&mut self, sample: SampleSystem) {
        log::debug!("loading sample {sample:?}");
        self.matrix = sample.matrix();
        self.phase = Phase::Editing;
    }

    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        self.ensure_editing()?;
        self.matrix = random_system(rng);
        Ok(())
    }

    pub fn compute(&mut self) -> Result<&AnalysisResult> {
        self.ensure_editing()?;
        let history = compute_rref_history(&self.matrix);
        let analysis = analyze(history.last());
        log::debug!("computed {} steps: {}", history.len(), analysis.summary);
        if let Some(point) = analysis.solution_point {
            if !satisfies_system(&self.matrix, point) {
                log::warn!("solution {point} does not satisfy the input system");
            }
        }
        let cursor = StepCursor::new(history.len());
        self.phase = Phase::Computed {
            history,
            analysis,
            cursor,
        };
        self.analysis().context("no analysis after computing")
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Editing;
    }

    pub fn history(&self) -> Option<&History> {
        match &self.phase {
            Phase::Computed { history, .. } => Some(history),
            Phase::Editing => None,
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            Phase::Computed { analysis, .. } => Some(analysis),
            Phase::Editing => None,
        }
    }

    fn move_cursor(&mut self, movement: fn(&mut StepCursor) -> usize) -> Option<usize> {
        match &mut self.phase {
            Phase::Computed { cursor, .. } => Some(movement(cursor)),
            Phase::Editing => None,
        }
    }

    pub fn step_forward(&mut self) -> Option<usize> {
        self.move_cursor(StepCursor::forward)
    }

    pub fn step_backward(&mut self) -> Option<usize> {
        self.move_cursor(StepCursor::backward)
    }

    pub fn rewind(&mut self) -> Option<usize> {
        self.move_cursor(StepCursor::rewind)
    }

    pub fn fast_forward(&mut self) -> Option<usize> {
        self.move_cursor(StepCursor::fast_forward)
    }

    pub fn current_step(&self) -> Option<&Step> {
        match &self.phase {
            Phase::Computed {
                history, cursor, ..
            } => history.get(cursor.index()),
            Phase::Editing => None,
        }
    }

    // the editable matrix before computing, the current step afterwards
    pub fn displayed_matrix(&self) -> &Matrix {
        self.current_step()
            .map(|step| &step.matrix)
            .unwrap_or(&self.matrix)
    }

    pub fn scene(&self) -> Result<SceneGeometry> {
        SceneGeometry::from_matrix(self.displayed_matrix())
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::from_sample(SampleSystem::default())
    }
}
