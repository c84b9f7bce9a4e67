pub mod geometry;
pub mod linear_system;
pub mod tolerance;
pub mod workbench;
