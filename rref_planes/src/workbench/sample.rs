use clap::ValueEnum;
use rand::Rng;
use strum_macros::EnumIter;

use crate::linear_system::Matrix;

// worked systems covering every kind of verdict
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, ValueEnum)]
pub enum SampleSystem {
    Identity,
    #[default]
    Unique,
    Line,
    Plane,
    Inconsistent,
    Parallel,
}

impl SampleSystem {
    fn rows(&self) -> [[f64; 4]; 3] {
        match self {
            Self::Identity => [
                [1.0, 0.0, 0.0, 1.0],
                [0.0, 1.0, 0.0, 2.0],
                [0.0, 0.0, 1.0, 3.0],
            ],
            Self::Unique => [
                [1.0, 1.0, 1.0, 3.0],
                [1.0, -1.0, 1.0, 1.0],
                [2.0, 1.0, -1.0, 2.0],
            ],
            // third row is the sum of the first two
            Self::Line => [
                [1.0, 1.0, 1.0, 3.0],
                [1.0, -1.0, 1.0, 1.0],
                [2.0, 0.0, 2.0, 4.0],
            ],
            Self::Plane => [
                [1.0, 1.0, 1.0, 2.0],
                [2.0, 2.0, 2.0, 4.0],
                [-1.0, -1.0, -1.0, -2.0],
            ],
            Self::Inconsistent => [
                [1.0, 1.0, 1.0, 2.0],
                [1.0, 1.0, 1.0, 4.0],
                [1.0, -1.0, 0.0, 1.0],
            ],
            Self::Parallel => [
                [1.0, 1.0, 1.0, 1.0],
                [1.0, 1.0, 1.0, 2.0],
                [2.0, 2.0, 2.0, 6.0],
            ],
        }
    }

    pub fn matrix(&self) -> Matrix {
        Matrix::from(self.rows())
    }
}

pub const RANDOM_COEFFICIENT_RANGE: std::ops::RangeInclusive<i32> = -5..=5;

// 3 equations, 3 unknowns, small integer entries so the steps stay readable
pub fn random_system<R: Rng>(rng: &mut R) -> Matrix {
    let rows: [[f64; 4]; 3] = std::array::from_fn(|_| {
        std::array::from_fn(|_| rng.gen_range(RANDOM_COEFFICIENT_RANGE) as f64)
    });
    Matrix::from(rows)
}
