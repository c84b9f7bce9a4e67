pub mod analysis;
mod back_substitution;
pub mod history;
pub mod matrix;
pub mod pivot;
pub mod residual;
pub mod rref;

pub use analysis::{analyze, AnalysisResult, Consistency, SolutionType};
pub use history::{History, RowOperation, Step};
pub use matrix::Matrix;
pub use rref::compute_rref_history;
