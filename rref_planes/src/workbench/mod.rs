pub mod sample;
pub mod step_cursor;
pub mod workbench;

pub use sample::{random_system, SampleSystem};
pub use step_cursor::StepCursor;
pub use workbench::{Phase, Workbench, MAX_EQUATIONS};
