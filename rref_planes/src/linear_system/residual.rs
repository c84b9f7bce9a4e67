use glam::DVec3;

use super::matrix::Matrix;
use crate::tolerance::is_negligible;

pub fn satisfies_system(system: &Matrix, point: DVec3) -> bool {
    // evaluate every equation at the point. if one of them misses its
    // constant by more than the tolerance, the point is not a solution.
    let variables = system.number_of_variables();
    let coordinates = point.to_array();
    for row in system.rows() {
        let lhs: f64 = row
            .iter()
            .take(variables.min(3))
            .zip(coordinates.iter())
            .map(|(a, x)| a * x)
            .sum();
        if !is_negligible(lhs - row[variables]) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_points_on_every_plane() {
        let system: Matrix = "1,1,1,3; 1,-1,1,1; 2,1,-1,2".parse().unwrap();
        assert!(satisfies_system(&system, DVec3::ONE));
        assert!(!satisfies_system(&system, DVec3::new(1.0, 1.0, 1.001)));
    }

    #[test]
    fn zero_rows_hold_everywhere() {
        let system = Matrix::zeroes(2, 4);
        assert!(satisfies_system(&system, DVec3::new(4.0, -2.0, 9.0)));
    }
}
